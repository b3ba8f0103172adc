//! The configuration record and its loader

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{ContentGlobSet, PluginReferenceList, ThemeOverrides};
use crate::plugin::PluginRegistry;
use crate::{utils, StylescanError, StylescanResult};

/// On-disk format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Build configuration handed to the style generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigRecord {
    /// Files to scan for class-name usage
    pub content: ContentGlobSet,

    /// Plugins to load, in order
    #[serde(default)]
    pub plugins: PluginReferenceList,

    /// Theme overrides
    #[serde(default)]
    pub theme: ThemeOverrides,
}

impl ConfigRecord {
    /// The project's own configuration
    pub fn literal() -> Self {
        Self {
            content: ContentGlobSet::new(["src/**/*.{html,rs}", "public/**/*.{html,rs}"]),
            plugins: ["forms", "typography"].into_iter().collect(),
            theme: ThemeOverrides::new(),
        }
    }

    /// Load the project's own configuration, resolved against the built-in plugins
    pub fn load() -> StylescanResult<Self> {
        Self::load_with(&PluginRegistry::builtin())
    }

    /// Load the project's own configuration against `registry`
    pub fn load_with(registry: &PluginRegistry) -> StylescanResult<Self> {
        let config = Self::literal();
        config.validate(registry)?;
        Ok(config)
    }

    /// Parse a configuration from text, without validating it
    pub fn parse(text: &str, format: ConfigFormat) -> StylescanResult<Self> {
        let parsed: Result<Self, String> = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| {
            StylescanError::MalformedConfig(format!("Failed to parse configuration: {e}"))
        })
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: &Path, registry: &PluginRegistry) -> StylescanResult<Self> {
        info!("Loading configuration from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        let config = Self::parse(&text, ConfigFormat::from_path(path))?;
        config.validate(registry)?;
        Ok(config)
    }

    /// Write the configuration, in the format the extension names
    pub fn save_to_file(&self, path: &Path) -> StylescanResult<()> {
        let text = match ConfigFormat::from_path(path) {
            ConfigFormat::Yaml => self.to_yaml()?,
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| {
                StylescanError::MalformedConfig(format!("Failed to serialize configuration: {e}"))
            })?,
        };
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> StylescanResult<String> {
        serde_yaml::to_string(self).map_err(serialize_error)
    }

    /// Validate the configuration
    pub fn validate(&self, registry: &PluginRegistry) -> StylescanResult<()> {
        self.content.validate()?;

        for reference in &self.plugins {
            let plugin = registry.resolve(reference)?;
            debug!(
                "Resolved plugin '{}' to {} {}",
                reference.id(),
                plugin.metadata().id,
                plugin.metadata().version
            );
        }

        for duplicate in self.plugins.duplicates() {
            warn!("Plugin '{}' is listed more than once", duplicate);
        }

        self.theme.validate()?;

        Ok(())
    }

    /// Hex SHA-256 of the YAML form with every mapping sorted by key.
    ///
    /// Equal records have equal fingerprints regardless of the order their
    /// nested mappings were written in.
    pub fn fingerprint(&self) -> StylescanResult<String> {
        let value = serde_yaml::to_value(self).map_err(serialize_error)?;
        let canonical = serde_yaml::to_string(&sort_mappings(value)).map_err(serialize_error)?;
        Ok(utils::calculate_string_hash(&canonical))
    }

    /// Directory content patterns resolve against
    pub fn content_base(&self, config_path: Option<&Path>) -> StylescanResult<PathBuf> {
        match config_path.and_then(Path::parent) {
            Some(dir) if self.content.is_relative() => Ok(if dir.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                dir.to_path_buf()
            }),
            _ => Ok(std::env::current_dir()?),
        }
    }
}

fn serialize_error(e: serde_yaml::Error) -> StylescanError {
    StylescanError::MalformedConfig(format!("Failed to serialize configuration: {e}"))
}

fn sort_mappings(value: serde_yaml::Value) -> serde_yaml::Value {
    use serde_yaml::Value;

    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(Value, Value)> = mapping
                .into_iter()
                .map(|(key, value)| (key, sort_mappings(value)))
                .collect();
            entries.sort_by_cached_key(|(key, _)| serde_yaml::to_string(key).unwrap_or_default());
            Value::Mapping(entries.into_iter().collect())
        }
        Value::Sequence(sequence) => {
            Value::Sequence(sequence.into_iter().map(sort_mappings).collect())
        }
        Value::Tagged(mut tagged) => {
            let inner = std::mem::replace(&mut tagged.value, Value::Null);
            tagged.value = sort_mappings(inner);
            Value::Tagged(tagged)
        }
        other => other,
    }
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self::literal()
    }
}
