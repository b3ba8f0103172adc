//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

use crate::config::THEME_KEYS;
use crate::utils;

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("Stylescan - utility-CSS build configuration checker");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));

    if detailed {
        println!("\nDetailed Information:");
        println!("  - Content globs with {{a,b}} alternation");
        println!("  - Built-in plugins: forms, typography");
        println!("  - Plugin manifests discovered from:");
        for dir in utils::default_plugin_directories() {
            println!("      {}", dir.display());
        }
        println!("  - Theme keys: {}", THEME_KEYS.join(", "));
    }

    Ok(())
}
