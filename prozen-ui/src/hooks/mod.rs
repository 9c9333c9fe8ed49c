mod fullscreen;
mod persistence;

pub use fullscreen::{is_fullscreen, FullscreenListener};
pub use persistence::{HostDataStorage, LocalStorage, PluginStorage};
