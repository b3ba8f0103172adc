//! Init command implementation

use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::ConfigRecord;

pub fn command() -> Command {
    Command::new("init")
        .about("Write the project configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path (.json writes JSON)")
                .value_name("FILE")
                .default_value("stylescan.yaml"),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Missing output path"))?;
    let force = matches.get_flag("force");

    write_config(&output_path, force)?;

    println!("Configuration file created: {}", output_path.display());
    println!("Edit the content globs, plugins and theme to suit the project.");

    Ok(())
}

/// Write the project configuration to `path`, refusing to overwrite unless `force`
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(anyhow!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        ));
    }

    info!("Initializing configuration file: {:?}", path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        crate::utils::ensure_directory(parent)?;
    }

    ConfigRecord::literal().save_to_file(path)?;
    Ok(())
}
