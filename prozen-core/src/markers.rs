//! Marker classes applied to the active view.
//!
//! The stylesheet interprets each marker; this module only decides which
//! markers go on or come off for a mode transition.

use crate::mode::ZenMode;
use crate::settings::ZenSettings;

/// Named presentation flag, rendered as a CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Content fade-in animation
    FadeIn,
    /// Linear vignette for text-like views
    Vignette,
    /// Radial vignette for graph views
    VignetteRadial,
    /// Hide the content scrollbar
    NoScroll,
    /// Header fades in with the content
    HeaderAnimate,
    /// Header hidden
    HeaderHide,
}

impl Marker {
    /// Markers that may be placed on the content element.
    pub const CONTENT: [Marker; 4] = [
        Marker::Vignette,
        Marker::VignetteRadial,
        Marker::FadeIn,
        Marker::NoScroll,
    ];

    /// Markers that may be placed on the header element.
    pub const HEADER: [Marker; 2] = [Marker::HeaderAnimate, Marker::HeaderHide];

    pub const fn class_name(self) -> &'static str {
        match self {
            Marker::FadeIn => "animate",
            Marker::Vignette => "vignette",
            Marker::VignetteRadial => "vignette-radial",
            Marker::NoScroll => "noscroll",
            Marker::HeaderAnimate => "animate",
            Marker::HeaderHide => "hide",
        }
    }
}

/// Element of the active view a marker applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Content,
    Header,
}

/// Host view type, as far as zen mode cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// Placeholder tab with no content. Zen mode never starts on it.
    Empty,
    Graph,
    Other,
}

impl ViewKind {
    pub fn from_view_type(view_type: &str) -> Self {
        match view_type {
            "empty" => ViewKind::Empty,
            "graph" => ViewKind::Graph,
            _ => ViewKind::Other,
        }
    }
}

/// Markers to add and remove, per region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerPlan {
    pub content_add: Vec<Marker>,
    pub content_remove: Vec<Marker>,
    pub header_add: Vec<Marker>,
    pub header_remove: Vec<Marker>,
}

impl MarkerPlan {
    pub fn added(&self, region: Region) -> &[Marker] {
        match region {
            Region::Content => &self.content_add,
            Region::Header => &self.header_add,
        }
    }

    pub fn removed(&self, region: Region) -> &[Marker] {
        match region {
            Region::Content => &self.content_remove,
            Region::Header => &self.header_remove,
        }
    }
}

/// Marker changes needed to reach `target`.
pub fn plan(target: ZenMode, settings: &ZenSettings, kind: ViewKind) -> MarkerPlan {
    match target {
        ZenMode::Zen => enter_plan(settings, kind),
        ZenMode::Normal => exit_plan(),
    }
}

fn enter_plan(settings: &ZenSettings, kind: ViewKind) -> MarkerPlan {
    let mut content_add = Vec::with_capacity(3);
    if !settings.show_scroll {
        content_add.push(Marker::NoScroll);
    }
    content_add.push(Marker::FadeIn);
    content_add.push(match kind {
        ViewKind::Graph => Marker::VignetteRadial,
        ViewKind::Empty | ViewKind::Other => Marker::Vignette,
    });

    let header = if settings.show_header {
        Marker::HeaderAnimate
    } else {
        Marker::HeaderHide
    };

    MarkerPlan {
        content_add,
        header_add: vec![header],
        ..MarkerPlan::default()
    }
}

fn exit_plan() -> MarkerPlan {
    MarkerPlan {
        content_remove: Marker::CONTENT.to_vec(),
        header_remove: Marker::HEADER.to_vec(),
        ..MarkerPlan::default()
    }
}
