//! Zen mode settings record.
//!
//! One flat record per plugin lifetime. Persisted data may be partial or
//! absent; [`ZenSettings::merged`] fills every missing field from the defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Default fade-in duration in seconds.
pub const DEFAULT_ANIMATION_DURATION: f64 = 1.2;

/// Default vignette color intensity.
pub const DEFAULT_VIGNETTE_OPACITY: f64 = 0.5;

/// Default vignette spread, in percent.
pub const DEFAULT_VIGNETTE_SCALE: f64 = 20.0;

/// Vignette opacity slider limits.
pub const VIGNETTE_OPACITY_MIN: f64 = 0.0;
pub const VIGNETTE_OPACITY_MAX: f64 = 1.0;
pub const VIGNETTE_OPACITY_STEP: f64 = 0.01;

/// Vignette scale slider limits.
pub const VIGNETTE_SCALE_MIN: f64 = 5.0;
pub const VIGNETTE_SCALE_MAX: f64 = 30.0;
pub const VIGNETTE_SCALE_STEP: f64 = 5.0;

/// Placeholder shown in the empty fade-in duration field.
pub const ANIMATION_DURATION_PLACEHOLDER: &str = "1.2";

/// User-tunable zen mode settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZenSettings {
    /// Fade-in duration in seconds. Not validated: may be zero, negative or NaN.
    pub animation_duration: f64,
    /// Keep the view header visible while in zen mode.
    pub show_header: bool,
    /// Keep the scrollbar visible while in zen mode.
    pub show_scroll: bool,
    /// Vignette color intensity [0, 1]
    pub vignette_opacity: f64,
    /// Vignette spread radius in percent [5, 30]
    pub vignette_scale: f64,
}

impl Default for ZenSettings {
    fn default() -> Self {
        Self {
            animation_duration: DEFAULT_ANIMATION_DURATION,
            show_header: false,
            show_scroll: true,
            vignette_opacity: DEFAULT_VIGNETTE_OPACITY,
            vignette_scale: DEFAULT_VIGNETTE_SCALE,
        }
    }
}

impl ZenSettings {
    /// Build settings from persisted data, field by field.
    ///
    /// Persisted values win; a field that is missing or has the wrong type
    /// falls back to its default. Anything other than a JSON object counts
    /// as an empty record.
    pub fn merged(persisted: Option<&Value>) -> Self {
        let mut settings = Self::default();
        let Some(Value::Object(map)) = persisted else {
            return settings;
        };

        if let Some(v) = field(map, "animationDuration") {
            settings.animation_duration = v;
        }
        if let Some(v) = field(map, "showHeader") {
            settings.show_header = v;
        }
        if let Some(v) = field(map, "showScroll") {
            settings.show_scroll = v;
        }
        if let Some(v) = field(map, "vignetteOpacity") {
            settings.vignette_opacity = v;
        }
        if let Some(v) = field(map, "vignetteScale") {
            settings.vignette_scale = v;
        }
        settings
    }

    /// Serialize the full record for persistence.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Apply a single-field edit.
    pub fn apply(&mut self, update: SettingUpdate) {
        match update {
            SettingUpdate::AnimationDuration(v) => self.animation_duration = v,
            SettingUpdate::ShowHeader(v) => self.show_header = v,
            SettingUpdate::ShowScroll(v) => self.show_scroll = v,
            SettingUpdate::VignetteOpacity(v) => self.vignette_opacity = v,
            SettingUpdate::VignetteScale(v) => self.vignette_scale = v,
        }
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    let value = map.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Ignoring persisted setting {key}={value}: {e}");
            None
        }
    }
}

/// One edit coming from the settings panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingUpdate {
    AnimationDuration(f64),
    ShowHeader(bool),
    ShowScroll(bool),
    VignetteOpacity(f64),
    VignetteScale(f64),
}

/// Convert the free-text duration field into seconds.
///
/// Follows the host's numeric text conversion: blank text reads as 0,
/// `Infinity` and unsigned `0x`/`0o`/`0b` integers are accepted, anything
/// else that is not a decimal number is NaN. Out-of-range values are kept as
/// entered.
pub fn parse_duration(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&trimmed[2..], radix);
    }

    // `f64::from_str` also takes "inf", "infinity" and "nan" spellings.
    let decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}

/// Live readout shown next to a slider, e.g. `" 0.35"`.
pub fn format_readout(value: f64) -> String {
    format!(" {value}")
}
