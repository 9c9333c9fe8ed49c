pub mod setting_slider;
pub mod setting_text;
pub mod setting_toggle;
pub mod settings_tab;

pub use setting_slider::SettingSlider;
pub use setting_text::SettingText;
pub use setting_toggle::SettingToggle;
pub use settings_tab::{SettingsPanel, SettingsTab, SharedStore};
