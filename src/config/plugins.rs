//! Plugin references as written in the configuration record

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use stylescan_plugin::PluginOptions;

/// A reference to a plugin, by identifier alone or with options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginReference {
    /// Bare identifier, e.g. `forms`
    Id(String),

    /// Identifier plus plugin options
    Configured(ConfiguredPlugin),
}

/// Plugin reference carrying options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfiguredPlugin {
    /// Plugin identifier
    pub id: String,

    /// Plugin-specific options
    #[serde(default)]
    pub options: PluginOptions,
}

impl PluginReference {
    pub fn id(&self) -> &str {
        match self {
            PluginReference::Id(id) => id,
            PluginReference::Configured(configured) => &configured.id,
        }
    }

    /// Options passed to the plugin, if any were given
    pub fn options(&self) -> Option<&PluginOptions> {
        match self {
            PluginReference::Id(_) => None,
            PluginReference::Configured(configured) => Some(&configured.options),
        }
    }
}

impl From<&str> for PluginReference {
    fn from(id: &str) -> Self {
        PluginReference::Id(id.to_string())
    }
}

/// Ordered plugin references; load order follows list order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginReferenceList(Vec<PluginReference>);

impl PluginReferenceList {
    pub fn new(references: Vec<PluginReference>) -> Self {
        Self(references)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginReference> {
        self.0.iter()
    }

    /// Identifiers in listed order
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(PluginReference::id).collect()
    }

    /// Identifiers listed more than once, in order of first repetition
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut duplicates = Vec::new();
        for id in self.ids() {
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a PluginReferenceList {
    type Item = &'a PluginReference;
    type IntoIter = std::slice::Iter<'a, PluginReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Into<PluginReference>> FromIterator<T> for PluginReferenceList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_reference_forms() {
        let yaml = r#"
- forms
- id: typography
  options:
    className: wysiwyg
"#;
        let list: PluginReferenceList = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(list.ids(), vec!["forms", "typography"]);
        assert!(list.iter().next().unwrap().options().is_none());

        let options = list.iter().nth(1).unwrap().options().unwrap();
        assert_eq!(
            options.get("className"),
            Some(&serde_yaml::Value::String("wysiwyg".to_string()))
        );
    }

    #[test]
    fn test_configured_reference_rejects_unknown_keys() {
        let result: Result<PluginReferenceList, _> =
            serde_yaml::from_str("- id: forms\n  version: 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicates() {
        let list: PluginReferenceList = ["forms", "typography", "forms", "forms"]
            .into_iter()
            .collect();
        assert_eq!(list.len(), 4);
        assert_eq!(list.duplicates(), vec!["forms"]);
    }
}
