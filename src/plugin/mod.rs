//! Plugin resolution for configuration records

pub mod registry;

pub use registry::PluginRegistry;
pub use stylescan_plugin::{
    builtin_plugins, ManifestPlugin, PluginId, PluginManifest, PluginMetadata, PluginOptions,
    StylePlugin,
};
