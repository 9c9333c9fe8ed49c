pub mod command;
pub mod markers;
pub mod mode;
pub mod presentation;
pub mod settings;
pub mod store;

pub use command::{Command, COMMANDS, ZEN_MODE};
pub use markers::{plan, Marker, MarkerPlan, Region, ViewKind};
pub use mode::{ModeController, ZenDocument, ZenMode, ZenView};
pub use presentation::{
    presentation_vars, FADE_IN_DURATION_VAR, VIGNETTE_OPACITY_VAR, VIGNETTE_SCALE_VAR,
};
pub use settings::{format_readout, parse_duration, SettingUpdate, ZenSettings};
pub use store::{MemoryStorage, SettingsStorage, SettingsStore, StorageError};
