//! Zen mode state machine.
//!
//! The controller owns the Normal/Zen state explicitly and drives the host
//! through two small adapter traits, so it never inspects a global
//! fullscreen flag.

use crate::markers::{plan, Marker, MarkerPlan, Region, ViewKind};
use crate::presentation::presentation_vars;
use crate::settings::ZenSettings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZenMode {
    #[default]
    Normal,
    Zen,
}

/// Document-level effects: root style properties and fullscreen release.
pub trait ZenDocument {
    fn set_style_property(&self, name: &str, value: &str);

    /// Fire-and-forget; the host decides whether fullscreen actually ends.
    fn exit_fullscreen(&self);
}

/// The host's active view.
pub trait ZenView {
    fn view_type(&self) -> &str;

    /// Fire-and-forget request on the view's container element.
    fn request_fullscreen(&self);

    fn add_markers(&self, region: Region, markers: &[Marker]);

    fn remove_markers(&self, region: Region, markers: &[Marker]);
}

#[derive(Debug, Default)]
pub struct ModeController {
    mode: ZenMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ZenMode {
        self.mode
    }

    pub fn is_zen(&self) -> bool {
        self.mode == ZenMode::Zen
    }

    /// Enter or leave zen mode on the active view.
    ///
    /// Returns the new mode, or `None` when there is no usable view (nothing
    /// is touched in that case).
    pub fn toggle<D, V>(
        &mut self,
        document: &D,
        view: Option<&V>,
        settings: &ZenSettings,
    ) -> Option<ZenMode>
    where
        D: ZenDocument,
        V: ZenView,
    {
        let Some(view) = view else {
            log::trace!("No active view, ignoring zen mode toggle");
            return None;
        };
        let kind = ViewKind::from_view_type(view.view_type());
        if kind == ViewKind::Empty {
            log::trace!("Active view is empty, ignoring zen mode toggle");
            return None;
        }

        match self.mode {
            ZenMode::Normal => self.enter(document, view, settings, kind),
            ZenMode::Zen => {
                document.exit_fullscreen();
                self.leave(view, settings, kind);
            }
        }
        Some(self.mode)
    }

    /// Fullscreen ended without going through [`toggle`](Self::toggle),
    /// e.g. the user pressed Escape. Reverts the markers on `view`.
    pub fn release<V: ZenView>(&mut self, view: &V) {
        if self.mode == ZenMode::Normal {
            return;
        }
        let kind = ViewKind::from_view_type(view.view_type());
        self.leave(view, &ZenSettings::default(), kind);
    }

    fn enter<D: ZenDocument, V: ZenView>(
        &mut self,
        document: &D,
        view: &V,
        settings: &ZenSettings,
        kind: ViewKind,
    ) {
        log::debug!("Entering zen mode on {} view", view.view_type());
        view.request_fullscreen();
        for (name, value) in presentation_vars(settings) {
            document.set_style_property(name, &value);
        }
        apply(view, &plan(ZenMode::Zen, settings, kind));
        self.mode = ZenMode::Zen;
    }

    fn leave<V: ZenView>(&mut self, view: &V, settings: &ZenSettings, kind: ViewKind) {
        log::debug!("Leaving zen mode on {} view", view.view_type());
        apply(view, &plan(ZenMode::Normal, settings, kind));
        self.mode = ZenMode::Normal;
    }
}

fn apply<V: ZenView>(view: &V, plan: &MarkerPlan) {
    for region in [Region::Content, Region::Header] {
        let removed = plan.removed(region);
        if !removed.is_empty() {
            view.remove_markers(region, removed);
        }
        let added = plan.added(region);
        if !added.is_empty() {
            view.add_markers(region, added);
        }
    }
}
