//! Plugin registry for resolving plugin references

use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use stylescan_plugin::manifest::MANIFEST_FILE_NAMES;
use stylescan_plugin::{builtin_plugins, ManifestPlugin, PluginOptions, StylePlugin};

use crate::config::PluginReference;
use crate::{StylescanError, StylescanResult};

/// Registered plugins, in registration order
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn StylePlugin>>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in plugins
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for plugin in builtin_plugins() {
            // Built-in identifiers are distinct.
            if let Err(e) = registry.register(plugin) {
                warn!("Skipping built-in plugin: {}", e);
            }
        }
        registry
    }

    /// Register a plugin. Fails if any of its identifiers is already taken.
    pub fn register(&mut self, plugin: Box<dyn StylePlugin>) -> StylescanResult<()> {
        if let Some(taken) = plugin
            .metadata()
            .identifiers()
            .find(|identifier| self.get(identifier).is_some())
        {
            return Err(StylescanError::Plugin(format!(
                "Plugin '{}' conflicts with a registered plugin on identifier '{}'",
                plugin.metadata().id,
                taken
            )));
        }

        debug!("Registered plugin: {}", plugin.metadata().id);
        self.plugins.push(plugin);
        Ok(())
    }

    /// Discover plugin manifests in `dirs` and register them.
    ///
    /// Missing directories are skipped. A manifest that fails to load or
    /// conflicts with a registered plugin is skipped with a warning.
    /// Returns how many plugins were added.
    pub fn discover<P: AsRef<Path>>(&mut self, dirs: &[P]) -> usize {
        let mut added = 0;
        for dir in dirs {
            added += self.scan_plugin_directory(dir.as_ref());
        }
        added
    }

    fn scan_plugin_directory(&mut self, plugin_dir: &Path) -> usize {
        if !plugin_dir.is_dir() {
            debug!("Plugin directory not found: {:?}", plugin_dir);
            return 0;
        }

        info!("Scanning plugin directory: {:?}", plugin_dir);

        let mut added = 0;
        for entry in WalkDir::new(plugin_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            let is_manifest = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| MANIFEST_FILE_NAMES.contains(&name));
            if !is_manifest {
                continue;
            }

            info!("Found plugin manifest: {:?}", path);
            let registered = ManifestPlugin::from_file(path)
                .map_err(|e| StylescanError::Plugin(e.to_string()))
                .and_then(|plugin| self.register(Box::new(plugin)));

            match registered {
                Ok(()) => added += 1,
                Err(e) => warn!("Failed to load plugin manifest {:?}: {}", path, e),
            }
        }

        added
    }

    /// Find the plugin `identifier` names, by id or alias
    pub fn get(&self, identifier: &str) -> Option<&dyn StylePlugin> {
        self.plugins
            .iter()
            .find(|plugin| plugin.metadata().answers_to(identifier))
            .map(|plugin| plugin.as_ref())
    }

    /// Resolve a reference and check the options it passes
    pub fn resolve(&self, reference: &PluginReference) -> StylescanResult<&dyn StylePlugin> {
        let plugin = self.get(reference.id()).ok_or_else(|| {
            StylescanError::MalformedConfig(format!(
                "Plugin '{}' is not installed (known: {})",
                reference.id(),
                self.identifiers().join(", ")
            ))
        })?;

        let no_options = PluginOptions::new();
        plugin
            .validate_options(reference.options().unwrap_or(&no_options))
            .map_err(|e| StylescanError::MalformedConfig(e.to_string()))?;

        Ok(plugin)
    }

    /// Every registered plugin, in registration order
    pub fn plugins(&self) -> impl Iterator<Item = &dyn StylePlugin> {
        self.plugins.iter().map(|plugin| plugin.as_ref())
    }

    /// Primary ids of every registered plugin
    pub fn identifiers(&self) -> Vec<&str> {
        self.plugins
            .iter()
            .map(|plugin| plugin.metadata().id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
