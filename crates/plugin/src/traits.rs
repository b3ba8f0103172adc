//! The plugin trait and shared option checks

use anyhow::{anyhow, Result};
use std::fmt;

use crate::{PluginMetadata, PluginOptions};

/// A style plugin that can be referenced from a configuration record
pub trait StylePlugin: Send + Sync + fmt::Debug {
    /// Get plugin metadata
    fn metadata(&self) -> &PluginMetadata;

    /// Names of the options this plugin accepts
    fn option_names(&self) -> Vec<&str>;

    /// Check the options a configuration record passes to this plugin
    fn validate_options(&self, options: &PluginOptions) -> Result<()> {
        reject_unknown_options(self.metadata(), options, &self.option_names())
    }
}

/// Fail on the first option key not listed in `allowed`
pub fn reject_unknown_options(
    metadata: &PluginMetadata,
    options: &PluginOptions,
    allowed: &[&str],
) -> Result<()> {
    match options.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(anyhow!(
            "Plugin '{}' does not accept option '{}' (accepted: {})",
            metadata.id,
            key,
            if allowed.is_empty() {
                "none".to_string()
            } else {
                allowed.join(", ")
            }
        )),
        None => Ok(()),
    }
}

/// Read a string option, failing if it is present with another type
pub fn string_option<'a>(
    metadata: &PluginMetadata,
    options: &'a PluginOptions,
    key: &str,
) -> Result<Option<&'a str>> {
    match options.get(key) {
        None => Ok(None),
        Some(serde_yaml::Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(anyhow!(
            "Plugin '{}' option '{}' must be a string, got {:?}",
            metadata.id,
            key,
            other
        )),
    }
}

/// Read a string option restricted to a fixed set of values
pub fn choice_option<'a>(
    metadata: &PluginMetadata,
    options: &'a PluginOptions,
    key: &str,
    choices: &[&str],
) -> Result<Option<&'a str>> {
    let value = string_option(metadata, options, key)?;
    if let Some(value) = value {
        if !choices.contains(&value) {
            return Err(anyhow!(
                "Plugin '{}' option '{}' must be one of {}, got '{}'",
                metadata.id,
                key,
                choices.join(" | "),
                value
            ));
        }
    }
    Ok(value)
}
