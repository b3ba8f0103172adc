//! Sources command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("sources")
        .about("List the files matched by the content globs")
        .arg(utils::config_arg())
        .arg(utils::plugin_dir_arg())
        .arg(
            clap::Arg::new("expanded")
                .short('e')
                .long("expanded")
                .help("Print the brace-expanded globs instead of matching files")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    for line in source_lines(matches)? {
        println!("{line}");
    }
    Ok(())
}

/// Matched files, or the expanded globs with `--expanded`
pub fn source_lines(matches: &ArgMatches) -> Result<Vec<String>> {
    let (config_path, config) = utils::load_config(matches)?;

    if matches.get_flag("expanded") {
        return Ok(config.content.expanded()?);
    }

    let base = config.content_base(Some(config_path.as_path()))?;
    info!("Resolving content globs against {:?}", base);

    let files = config.content.resolve_files(&base)?;
    info!("{} files matched", files.len());

    Ok(files
        .iter()
        .map(|file| file.display().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn matches(args: &[&str]) -> ArgMatches {
        command()
            .try_get_matches_from(std::iter::once("sources").chain(args.iter().copied()))
            .unwrap()
    }

    fn project() -> assert_fs::TempDir {
        let temp = assert_fs::TempDir::new().unwrap();
        for dir in ["site/src/views", "site/public", "elsewhere"] {
            temp.child(dir).create_dir_all().unwrap();
        }
        temp.child("site/src/main.rs").touch().unwrap();
        temp.child("site/src/views/card.html").touch().unwrap();
        temp.child("site/public/index.html").touch().unwrap();
        temp.child("site/public/app.css").touch().unwrap();
        temp
    }

    #[test]
    fn test_relative_content_resolves_against_config_dir() {
        let temp = project();
        let config = temp.child("site/stylescan.yaml");
        config
            .write_str(
                "content:\n  files:\n    - 'src/**/*.{html,rs}'\n    - 'public/**/*.{html,rs}'\n  relative: true\nplugins: [forms]\n",
            )
            .unwrap();

        let config_path = config.path().to_string_lossy().into_owned();
        let lines = source_lines(&matches(&["--config", &config_path])).unwrap();

        let site = temp.path().join("site");
        assert_eq!(
            lines,
            vec![
                site.join("public/index.html").display().to_string(),
                site.join("src/main.rs").display().to_string(),
                site.join("src/views/card.html").display().to_string(),
            ]
        );
    }

    #[test]
    fn test_absolute_content_ignores_config_dir() {
        let temp = project();
        let pattern = temp.path().join("site/public/*.{html,css}");
        let config = temp.child("elsewhere/stylescan.yaml");
        config
            .write_str(&format!("content:\n  - '{}'\n", pattern.display()))
            .unwrap();

        let config_path = config.path().to_string_lossy().into_owned();
        let lines = source_lines(&matches(&["--config", &config_path])).unwrap();

        assert_eq!(
            lines,
            vec![
                temp.path().join("site/public/app.css").display().to_string(),
                temp.path().join("site/public/index.html").display().to_string(),
            ]
        );
    }

    #[test]
    fn test_expanded_lists_globs() {
        let temp = assert_fs::TempDir::new().unwrap();
        let config = temp.child("stylescan.yaml");
        config
            .write_str("content: ['src/**/*.{html,rs}']\n")
            .unwrap();

        let config_path = config.path().to_string_lossy().into_owned();
        let lines = source_lines(&matches(&["--config", &config_path, "--expanded"])).unwrap();

        assert_eq!(lines, vec!["src/**/*.html", "src/**/*.rs"]);
    }

    #[test]
    fn test_invalid_glob_fails() {
        let temp = assert_fs::TempDir::new().unwrap();
        let config = temp.child("stylescan.yaml");
        config.write_str("content: ['src/**/*.{html,rs']\n").unwrap();

        let config_path = config.path().to_string_lossy().into_owned();
        let err = source_lines(&matches(&["--config", &config_path])).unwrap_err();
        assert!(err.to_string().contains("Invalid glob"));
    }
}
