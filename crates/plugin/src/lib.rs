//! Plugin descriptors for stylescan
//!
//! A plugin here is the configuration-side view of a style-generation
//! extension: its identity, the names it answers to, and the options it
//! accepts. Generating CSS is left to the build pipeline that loads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod builtin;
pub mod manifest;
pub mod traits;


pub use builtin::{builtin_plugins, FormsPlugin, TypographyPlugin};
pub use manifest::{ManifestPlugin, PluginManifest};
pub use traits::StylePlugin;

/// Plugin identifier
pub type PluginId = String;

/// Options passed to a plugin from the configuration record
pub type PluginOptions = BTreeMap<String, serde_yaml::Value>;

/// Plugin metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Plugin identifier
    pub id: PluginId,

    /// Plugin name
    pub name: String,

    /// Plugin version
    pub version: String,

    /// Plugin description
    #[serde(default)]
    pub description: String,

    /// Alternative identifiers, e.g. the package name the plugin ships under
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl PluginMetadata {
    /// Whether `identifier` names this plugin, by id or by alias
    pub fn answers_to(&self, identifier: &str) -> bool {
        self.id == identifier || self.aliases.iter().any(|alias| alias == identifier)
    }

    /// Every identifier this plugin can be referenced by
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}
