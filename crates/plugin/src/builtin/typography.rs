//! Typographic styling plugin

use anyhow::{anyhow, Result};

use crate::traits::{choice_option, reject_unknown_options, string_option};
use crate::{PluginMetadata, PluginOptions, StylePlugin};

const TARGETS: &[&str] = &["modern", "legacy"];

/// Typographic defaults for prose the page author does not control.
#[derive(Debug, Clone)]
pub struct TypographyPlugin {
    metadata: PluginMetadata,
}

impl TypographyPlugin {
    pub fn new() -> Self {
        Self {
            metadata: PluginMetadata {
                id: "typography".to_string(),
                name: "Typography".to_string(),
                version: "0.5.0".to_string(),
                description: "Beautiful typographic defaults for HTML you don't control"
                    .to_string(),
                aliases: vec!["@tailwindcss/typography".to_string()],
            },
        }
    }
}

impl Default for TypographyPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl StylePlugin for TypographyPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn option_names(&self) -> Vec<&str> {
        vec!["className", "target"]
    }

    fn validate_options(&self, options: &PluginOptions) -> Result<()> {
        reject_unknown_options(&self.metadata, options, &self.option_names())?;

        if let Some(class_name) = string_option(&self.metadata, options, "className")? {
            if !is_class_name(class_name) {
                return Err(anyhow!(
                    "Plugin '{}' option 'className' is not a usable class name: '{}'",
                    self.metadata.id,
                    class_name
                ));
            }
        }

        choice_option(&self.metadata, options, "target", TARGETS)?;
        Ok(())
    }
}

// Letters, digits, '-' and '_', not starting with a digit.
fn is_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '-' || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
