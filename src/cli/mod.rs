//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("stylescan")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Check the content, plugin and theme configuration of a utility-CSS build")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::plugins::command())
            .subcommand(commands::sources::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches),
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches),
            Some(("plugins", sub_matches)) => commands::plugins::run(sub_matches),
            Some(("sources", sub_matches)) => commands::sources::run(sub_matches),
            Some(("info", sub_matches)) => commands::info::run(sub_matches),
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use clap::{Arg, ArgAction, ArgMatches};
    use std::path::PathBuf;
    use tracing::debug;

    use crate::{ConfigRecord, PluginRegistry};

    /// Configuration files looked for when `--config` is absent
    pub const DEFAULT_CONFIG_PATHS: &[&str] = &[
        "stylescan.yaml",
        "stylescan.yml",
        ".stylescan.yaml",
        "stylescan.json",
    ];

    /// The `--config` argument
    pub fn config_arg() -> Arg {
        Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file path")
            .value_name("FILE")
    }

    /// The repeatable `--plugin-dir` argument
    pub fn plugin_dir_arg() -> Arg {
        Arg::new("plugin-dir")
            .long("plugin-dir")
            .help("Additional directory to search for plugin manifests")
            .value_name("DIR")
            .action(ArgAction::Append)
    }

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(PathBuf::from(config_path));
        }

        DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
            .ok_or_else(|| {
                anyhow!("No configuration file found. Use --config to specify a file or create one with 'stylescan init'")
            })
    }

    /// Plugin directories: defaults first, then any given on the command line
    pub fn plugin_directories(matches: &ArgMatches) -> Result<Vec<PathBuf>> {
        let mut dirs = crate::utils::default_plugin_directories();
        if let Ok(Some(extra)) = matches.try_get_many::<String>("plugin-dir") {
            dirs.extend(extra.map(PathBuf::from));
        }

        dirs.iter()
            .map(|dir| crate::utils::expand_path(dir))
            .collect()
    }

    /// Build the registry: built-in plugins plus discovered manifests
    pub fn load_registry(matches: &ArgMatches) -> Result<PluginRegistry> {
        let mut registry = PluginRegistry::builtin();
        let added = registry.discover(&plugin_directories(matches)?);
        debug!("Discovered {} external plugins", added);
        Ok(registry)
    }

    /// Load configuration from file
    pub fn load_config(matches: &ArgMatches) -> Result<(PathBuf, ConfigRecord)> {
        let config_path = get_config_path(matches)?;
        let registry = load_registry(matches)?;
        let config = ConfigRecord::from_file(&config_path, &registry)?;
        Ok((config_path, config))
    }
}
