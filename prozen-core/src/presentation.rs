//! Root-level CSS custom properties read by the zen stylesheet.

use crate::settings::ZenSettings;

pub const VIGNETTE_OPACITY_VAR: &str = "--vignette-opacity";
pub const FADE_IN_DURATION_VAR: &str = "--fadeIn-duration";
pub const VIGNETTE_SCALE_VAR: &str = "--vignette-scale";

/// `(property, value)` pairs written onto the document root on entering zen mode.
pub fn presentation_vars(settings: &ZenSettings) -> [(&'static str, String); 3] {
    [
        (VIGNETTE_OPACITY_VAR, settings.vignette_opacity.to_string()),
        (
            FADE_IN_DURATION_VAR,
            format!("{}s", settings.animation_duration),
        ),
        (VIGNETTE_SCALE_VAR, format!("{}%", settings.vignette_scale)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vars() {
        let vars = presentation_vars(&ZenSettings::default());
        assert_eq!(vars[0], (VIGNETTE_OPACITY_VAR, "0.5".to_string()));
        assert_eq!(vars[1], (FADE_IN_DURATION_VAR, "1.2s".to_string()));
        assert_eq!(vars[2], (VIGNETTE_SCALE_VAR, "20%".to_string()));
    }

    #[test]
    fn unvalidated_duration_is_passed_through() {
        let settings = ZenSettings {
            animation_duration: f64::NAN,
            ..ZenSettings::default()
        };
        let vars = presentation_vars(&settings);
        assert_eq!(vars[1].1, "NaNs");
    }
}
