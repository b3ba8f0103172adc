//! Theme overrides

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{StylescanError, StylescanResult};

/// Theme keys the style generator recognizes
pub const THEME_KEYS: &[&str] = &[
    "screens",
    "supports",
    "data",
    "colors",
    "spacing",
    "columns",
    "container",
    "fontFamily",
    "fontSize",
    "fontWeight",
    "lineHeight",
    "letterSpacing",
    "borderRadius",
    "borderWidth",
    "boxShadow",
    "opacity",
    "zIndex",
    "animation",
    "keyframes",
    "transitionDuration",
    "transitionTimingFunction",
    "backgroundImage",
    "typography",
];

/// Key whose value extends defaults instead of replacing them
pub const EXTEND_KEY: &str = "extend";

/// Mapping from theme key to override value. Empty means every default applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeOverrides(BTreeMap<String, serde_yaml::Value>);

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Set an override, replacing any previous value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: serde_yaml::Value) {
        self.0.insert(key.into(), value);
    }

    /// Check keys against the theme vocabulary
    pub fn validate(&self) -> StylescanResult<()> {
        for (key, value) in &self.0 {
            if key == EXTEND_KEY {
                validate_extend(value)?;
            } else if !THEME_KEYS.contains(&key.as_str()) {
                return Err(StylescanError::MalformedConfig(format!(
                    "Unknown theme key: {key}"
                )));
            }
        }
        Ok(())
    }
}

fn validate_extend(value: &serde_yaml::Value) -> StylescanResult<()> {
    let mapping = value.as_mapping().ok_or_else(|| {
        StylescanError::MalformedConfig(format!("Theme '{EXTEND_KEY}' must be a mapping"))
    })?;

    for key in mapping.keys() {
        let key = key.as_str().ok_or_else(|| {
            StylescanError::MalformedConfig(format!(
                "Theme '{EXTEND_KEY}' keys must be strings, got {key:?}"
            ))
        })?;
        if !THEME_KEYS.contains(&key) {
            return Err(StylescanError::MalformedConfig(format!(
                "Unknown theme key: {EXTEND_KEY}.{key}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_theme_serializes_as_mapping() {
        let theme = ThemeOverrides::new();
        assert!(theme.validate().is_ok());
        assert_eq!(serde_yaml::to_string(&theme).unwrap().trim(), "{}");
        assert_eq!(serde_json::to_string(&theme).unwrap(), "{}");
    }

    #[test]
    fn test_known_keys_and_extend() {
        let theme: ThemeOverrides = serde_yaml::from_str(
            r##"
colors:
  brand: "#0ea5e9"
extend:
  spacing:
    "128": 32rem
"##,
        )
        .unwrap();
        assert!(theme.validate().is_ok());
        assert_eq!(theme.keys().collect::<Vec<_>>(), vec!["colors", "extend"]);
    }

    #[test]
    fn test_unknown_key_is_malformed() {
        let mut theme = ThemeOverrides::new();
        theme.insert("colours", serde_yaml::Value::Null);
        match theme.validate() {
            Err(StylescanError::MalformedConfig(msg)) => assert!(msg.contains("colours")),
            other => panic!("expected MalformedConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_extend_must_be_known_mapping() {
        let mut theme = ThemeOverrides::new();
        theme.insert(EXTEND_KEY, serde_yaml::Value::String("colors".to_string()));
        assert!(theme.validate().is_err());

        let theme: ThemeOverrides = serde_yaml::from_str("extend:\n  extend: {}\n").unwrap();
        assert!(matches!(
            theme.validate(),
            Err(StylescanError::MalformedConfig(_))
        ));
    }
}
