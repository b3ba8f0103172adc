//! Plugin manifests discovered on disk

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{PluginMetadata, StylePlugin};

/// Manifest file names recognized inside a plugin directory
pub const MANIFEST_FILE_NAMES: &[&str] = &["plugin.yaml", "plugin.yml"];

/// Plugin manifest file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Plugin metadata
    pub metadata: PluginMetadata,

    /// Option names the plugin accepts
    #[serde(default)]
    pub options: Vec<String>,
}

impl PluginManifest {
    /// Load a manifest from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest: PluginManifest = serde_yaml::from_str(&content)?;
        manifest.validate()?;
        debug!(
            "Read manifest for plugin '{}' from {:?}",
            manifest.metadata.id, path
        );
        Ok(manifest)
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.metadata.id.trim().is_empty() {
            return Err(anyhow!("Plugin manifest id cannot be empty"));
        }

        if self.metadata.name.trim().is_empty() {
            return Err(anyhow!(
                "Plugin manifest '{}' has an empty name",
                self.metadata.id
            ));
        }

        if let Some(alias) = self.metadata.aliases.iter().find(|a| a.trim().is_empty()) {
            return Err(anyhow!(
                "Plugin manifest '{}' has an empty alias: {:?}",
                self.metadata.id,
                alias
            ));
        }

        Ok(())
    }
}

/// A plugin known only through its manifest
#[derive(Debug, Clone)]
pub struct ManifestPlugin {
    manifest: PluginManifest,
    manifest_path: PathBuf,
}

impl ManifestPlugin {
    pub fn new(manifest: PluginManifest, manifest_path: PathBuf) -> Self {
        Self {
            manifest,
            manifest_path,
        }
    }

    /// Load and wrap the manifest at `path`
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(PluginManifest::from_file(path)?, path.to_path_buf()))
    }

    /// Where the manifest was read from
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

impl StylePlugin for ManifestPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.manifest.metadata
    }

    fn option_names(&self) -> Vec<&str> {
        self.manifest.options.iter().map(String::as_str).collect()
    }
}
