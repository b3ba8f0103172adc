use stylescan::{ConfigRecord, PluginRegistry};
use tempfile::TempDir;

#[test]
fn test_external_plugin_discovery() {
    // Create a temporary directory for testing
    let temp_dir = TempDir::new().unwrap();
    let plugin_dir = temp_dir.path().join("plugins/aspect-ratio");
    std::fs::create_dir_all(&plugin_dir).unwrap();

    let plugin_manifest = r#"
metadata:
  id: "aspect-ratio"
  name: "Aspect Ratio"
  version: "0.4.2"
  description: "Composable aspect ratio utilities"
  aliases:
    - "@tailwindcss/aspect-ratio"
options: []
"#;
    std::fs::write(plugin_dir.join("plugin.yaml"), plugin_manifest).unwrap();

    let config_path = temp_dir.path().join("stylescan.yaml");
    std::fs::write(
        &config_path,
        r#"
content:
  - "src/**/*.{html,rs}"
plugins:
  - forms
  - "@tailwindcss/aspect-ratio"
"#,
    )
    .unwrap();

    // Without discovery the manifest plugin is unknown
    assert!(ConfigRecord::from_file(&config_path, &PluginRegistry::builtin()).is_err());

    let mut registry = PluginRegistry::builtin();
    let added = registry.discover(&[temp_dir.path().join("plugins")]);
    assert_eq!(added, 1);

    let config = ConfigRecord::from_file(&config_path, &registry).unwrap();
    assert_eq!(config.plugins.ids(), vec!["forms", "@tailwindcss/aspect-ratio"]);

    let plugin = registry.get("aspect-ratio").unwrap();
    assert_eq!(plugin.metadata().version, "0.4.2");
    assert!(plugin.option_names().is_empty());
}

#[test]
fn test_manifest_plugin_rejects_options() {
    let temp_dir = TempDir::new().unwrap();
    let plugin_dir = temp_dir.path().join("line-clamp");
    std::fs::create_dir_all(&plugin_dir).unwrap();
    std::fs::write(
        plugin_dir.join("plugin.yml"),
        "metadata:\n  id: line-clamp\n  name: Line Clamp\n  version: 0.4.4\n",
    )
    .unwrap();

    let mut registry = PluginRegistry::builtin();
    registry.discover(&[temp_dir.path()]);

    let config = ConfigRecord::parse(
        "content: ['index.html']\nplugins:\n  - id: line-clamp\n    options:\n      lines: 3\n",
        stylescan::ConfigFormat::Yaml,
    )
    .unwrap();

    let err = config.validate(&registry).unwrap_err();
    assert!(err.to_string().contains("does not accept option 'lines'"));
}
