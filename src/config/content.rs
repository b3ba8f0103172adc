//! Content glob set: which files the scanner inspects for class names

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{pattern, StylescanError, StylescanResult};

/// Ordered content patterns, optionally relative to the config file.
///
/// Deserializes from a plain list of patterns, or from
/// `{ files: [...], relative: true }`. Serializes back to a plain list
/// unless `relative` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContentRepr", into = "ContentRepr")]
pub struct ContentGlobSet {
    files: Vec<String>,
    relative: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ContentRepr {
    Files(Vec<String>),
    Detailed(DetailedContent),
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailedContent {
    files: Vec<String>,
    #[serde(default)]
    relative: bool,
}

impl From<ContentRepr> for ContentGlobSet {
    fn from(repr: ContentRepr) -> Self {
        match repr {
            ContentRepr::Files(files) => Self {
                files,
                relative: false,
            },
            ContentRepr::Detailed(detailed) => Self {
                files: detailed.files,
                relative: detailed.relative,
            },
        }
    }
}

impl From<ContentGlobSet> for ContentRepr {
    fn from(set: ContentGlobSet) -> Self {
        if set.relative {
            ContentRepr::Detailed(DetailedContent {
                files: set.files,
                relative: true,
            })
        } else {
            ContentRepr::Files(set.files)
        }
    }
}

impl ContentGlobSet {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            relative: false,
        }
    }

    /// Resolve patterns against the config file's directory
    pub fn relative_to_config(mut self) -> Self {
        self.relative = true;
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.files
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Check every pattern's syntax
    pub fn validate(&self) -> StylescanResult<()> {
        if self.files.is_empty() {
            warn!("No content patterns configured; no files will be scanned for class names");
        }

        for pattern in &self.files {
            pattern::check(pattern)?;
        }

        Ok(())
    }

    /// Every pattern with brace alternation expanded, in order
    pub fn expanded(&self) -> StylescanResult<Vec<String>> {
        let mut expanded = Vec::new();
        for pattern in &self.files {
            expanded.extend(pattern::expand(pattern)?);
        }
        Ok(expanded)
    }

    /// Find the existing files the patterns match under `base`.
    ///
    /// Absolute patterns ignore `base`. The result is sorted and free of
    /// duplicates.
    pub fn resolve_files(&self, base: &Path) -> StylescanResult<Vec<PathBuf>> {
        let escaped_base = glob::Pattern::escape(&base.to_string_lossy());
        let mut files = BTreeSet::new();

        for pattern in &self.files {
            for expansion in pattern::expand(pattern)? {
                let full = if Path::new(&expansion).is_absolute() {
                    expansion.clone()
                } else {
                    Path::new(&escaped_base)
                        .join(&expansion)
                        .to_string_lossy()
                        .into_owned()
                };

                debug!("Matching content glob: {}", full);

                let entries = glob::glob(&full).map_err(|e| StylescanError::InvalidGlob {
                    pattern: pattern.clone(),
                    reason: e.msg.to_string(),
                })?;

                for entry in entries {
                    match entry {
                        Ok(path) if path.is_file() => {
                            files.insert(path);
                        }
                        Ok(_) => {}
                        Err(e) => warn!("Failed to match pattern {}: {}", pattern, e),
                    }
                }
            }
        }

        Ok(files.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ContentGlobSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
