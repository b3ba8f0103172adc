//! Configuration management for stylescan

pub mod config;
pub mod content;
pub mod plugins;
pub mod theme;


// Re-export main types for convenience
pub use config::{ConfigFormat, ConfigRecord};
pub use content::ContentGlobSet;
pub use plugins::{ConfiguredPlugin, PluginReference, PluginReferenceList};
pub use theme::{ThemeOverrides, THEME_KEYS};
