//! Stylescan Library
//!
//! Defines, loads and validates the configuration a utility-CSS build reads:
//! the content globs scanned for class names, the plugins to enable, and the
//! theme overrides.

pub mod cli;
pub mod config;
pub mod pattern;
pub mod plugin;
pub mod utils;

pub use config::{
    ConfigFormat, ConfigRecord, ContentGlobSet, PluginReference, PluginReferenceList,
    ThemeOverrides,
};
pub use plugin::{PluginMetadata, PluginRegistry, StylePlugin};

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum StylescanError {
    #[error("Invalid glob '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },

    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),

    #[error("Plugin error: {0}")]
    Plugin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type StylescanResult<T> = Result<T, StylescanError>;
