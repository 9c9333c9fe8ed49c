//! Plugin-wide constants.

/// localStorage key used when the host does not provide its own plugin data.
pub const STORAGE_KEY: &str = "prozen_settings";

/// Host event fired whenever the document enters or leaves fullscreen.
pub const FULLSCREEN_CHANGE_EVENT: &str = "fullscreenchange";
