//! Form-element styling plugin

use anyhow::Result;

use crate::traits::{choice_option, reject_unknown_options};
use crate::{PluginMetadata, PluginOptions, StylePlugin};

const STRATEGIES: &[&str] = &["base", "class"];

/// Resets form controls so utilities can style them.
///
/// Accepts a single `strategy` option: `base` restyles elements globally,
/// `class` only applies through `form-*` classes.
#[derive(Debug, Clone)]
pub struct FormsPlugin {
    metadata: PluginMetadata,
}

impl FormsPlugin {
    pub fn new() -> Self {
        Self {
            metadata: PluginMetadata {
                id: "forms".to_string(),
                name: "Forms".to_string(),
                version: "0.5.0".to_string(),
                description: "Basic reset for form elements that is easy to override with utilities"
                    .to_string(),
                aliases: vec!["@tailwindcss/forms".to_string()],
            },
        }
    }
}

impl Default for FormsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl StylePlugin for FormsPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn option_names(&self) -> Vec<&str> {
        vec!["strategy"]
    }

    fn validate_options(&self, options: &PluginOptions) -> Result<()> {
        reject_unknown_options(&self.metadata, options, &self.option_names())?;
        choice_option(&self.metadata, options, "strategy", STRATEGIES)?;
        Ok(())
    }
}
