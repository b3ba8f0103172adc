//! Validate command implementation

use crate::cli::utils;
use crate::ConfigRecord;
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::Path;
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate configuration file")
        .arg(utils::config_arg())
        .arg(utils::plugin_dir_arg())
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let (config_path, config) = utils::load_config(matches)?;
    for line in summary_lines(&config_path, &config)? {
        println!("{line}");
    }

    Ok(())
}

/// Summary printed for a configuration that passed validation
pub fn summary_lines(config_path: &Path, config: &ConfigRecord) -> Result<Vec<String>> {
    let mut lines = vec![
        format!("Configuration file is valid: {}", config_path.display()),
        format!("Fingerprint: {}", config.fingerprint()?),
        format!(
            "Content patterns: {}{}",
            config.content.len(),
            if config.content.is_relative() {
                " (relative to config file)"
            } else {
                ""
            }
        ),
    ];
    lines.extend(config.content.iter().map(|pattern| format!("  - {pattern}")));

    lines.push(format!("Plugins: {}", config.plugins.len()));
    for reference in &config.plugins {
        lines.push(match reference.options() {
            Some(options) if !options.is_empty() => format!(
                "  - {} ({})",
                reference.id(),
                options.keys().cloned().collect::<Vec<_>>().join(", ")
            ),
            _ => format!("  - {}", reference.id()),
        });
    }

    if config.theme.is_empty() {
        lines.push("Theme: defaults".to_string());
    } else {
        lines.push(format!(
            "Theme overrides: {}",
            config.theme.keys().collect::<Vec<_>>().join(", ")
        ));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn matches(args: &[&str]) -> ArgMatches {
        command()
            .try_get_matches_from(std::iter::once("validate").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_summary_of_project_config() {
        let config = ConfigRecord::literal();
        let lines = summary_lines(Path::new("stylescan.yaml"), &config).unwrap();

        assert_eq!(
            lines[1],
            format!("Fingerprint: {}", config.fingerprint().unwrap())
        );
        assert_eq!(
            lines[2..],
            [
                "Content patterns: 2",
                "  - src/**/*.{html,rs}",
                "  - public/**/*.{html,rs}",
                "Plugins: 2",
                "  - forms",
                "  - typography",
                "Theme: defaults",
            ]
        );
    }

    #[test]
    fn test_load_and_summarize_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("stylescan.yaml");
        file.write_str(
            "content:\n  files: ['src/**/*.rs']\n  relative: true\nplugins:\n  - id: forms\n    options:\n      strategy: class\ntheme:\n  colors: {}\n",
        )
        .unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let (config_path, config) = utils::load_config(&matches(&["-c", &path])).unwrap();
        let lines = summary_lines(&config_path, &config).unwrap();

        assert!(lines.contains(&"Content patterns: 1 (relative to config file)".to_string()));
        assert!(lines.contains(&"  - forms (strategy)".to_string()));
        assert!(lines.contains(&"Theme overrides: colors".to_string()));
    }

    #[test]
    fn test_unknown_plugin_fails_validation() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("stylescan.yaml");
        file.write_str("content: ['index.html']\nplugins: [line-clamp]\n")
            .unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let err = utils::load_config(&matches(&["-c", &path])).unwrap_err();
        assert!(err.to_string().contains("line-clamp"));
    }
}
