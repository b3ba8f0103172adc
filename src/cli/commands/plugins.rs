//! Plugin listing commands

use crate::cli::utils;
use crate::StylePlugin;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};

/// Create the plugins command
pub fn command() -> Command {
    Command::new("plugins")
        .about("Inspect available plugins")
        .subcommand_negates_reqs(true)
        .subcommand(
            Command::new("list")
                .about("List available plugins")
                .arg(
                    clap::Arg::new("detailed")
                        .short('d')
                        .long("detailed")
                        .help("Show detailed information")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(utils::plugin_dir_arg()),
        )
        .subcommand(
            Command::new("info")
                .about("Show plugin information")
                .arg(clap::arg!(<PLUGIN_ID> "Plugin id or alias"))
                .arg(utils::plugin_dir_arg()),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => list(sub_matches),
        Some(("info", sub_matches)) => info(sub_matches),
        _ => {
            let _ = command().print_help();
            Ok(())
        }
    }
}

fn list(matches: &ArgMatches) -> Result<()> {
    for line in list_lines(matches)? {
        println!("{line}");
    }
    Ok(())
}

fn info(matches: &ArgMatches) -> Result<()> {
    for line in info_lines(matches)? {
        println!("{line}");
    }
    Ok(())
}

/// Output of `plugins list`
pub fn list_lines(matches: &ArgMatches) -> Result<Vec<String>> {
    let registry = utils::load_registry(matches)?;
    let detailed = matches.get_flag("detailed");

    let mut lines = vec![format!("Available plugins ({}):", registry.len())];
    for plugin in registry.plugins() {
        let metadata = plugin.metadata();
        lines.push(format!("  {} {}", metadata.id, metadata.version));
        if detailed {
            lines.extend(details(plugin));
        }
    }

    Ok(lines)
}

/// Output of `plugins info`; the plugin may be named by id or alias
pub fn info_lines(matches: &ArgMatches) -> Result<Vec<String>> {
    let registry = utils::load_registry(matches)?;
    let identifier = matches
        .get_one::<String>("PLUGIN_ID")
        .ok_or_else(|| anyhow!("Missing plugin id"))?;

    let plugin = registry
        .get(identifier)
        .ok_or_else(|| anyhow!("Plugin not found: {}", identifier))?;

    let mut lines = vec![format!(
        "{} {}",
        plugin.metadata().id,
        plugin.metadata().version
    )];
    lines.extend(details(plugin));
    Ok(lines)
}

fn details(plugin: &dyn StylePlugin) -> Vec<String> {
    let metadata = plugin.metadata();
    let mut lines = vec![format!("    Name: {}", metadata.name)];
    if !metadata.description.is_empty() {
        lines.push(format!("    Description: {}", metadata.description));
    }
    if !metadata.aliases.is_empty() {
        lines.push(format!("    Aliases: {}", metadata.aliases.join(", ")));
    }
    let options = plugin.option_names();
    if !options.is_empty() {
        lines.push(format!("    Options: {}", options.join(", ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sub_matches(args: &[&str]) -> ArgMatches {
        let matches = command()
            .try_get_matches_from(std::iter::once("plugins").chain(args.iter().copied()))
            .unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[test]
    fn test_info_by_alias() {
        let lines = info_lines(&sub_matches(&["info", "@tailwindcss/typography"])).unwrap();
        assert_eq!(lines[0], "typography 0.5.0");
        assert!(lines.contains(&"    Aliases: @tailwindcss/typography".to_string()));
        assert!(lines.contains(&"    Options: className, target".to_string()));
    }

    #[test]
    fn test_info_unknown_plugin() {
        let err = info_lines(&sub_matches(&["info", "line-clamp"])).unwrap_err();
        assert!(err.to_string().contains("Plugin not found: line-clamp"));
    }

    #[test]
    fn test_list_includes_discovered_plugins() {
        let temp_dir = TempDir::new().unwrap();
        let plugin_dir = temp_dir.path().join("aspect-ratio");
        std::fs::create_dir_all(&plugin_dir).unwrap();
        std::fs::write(
            plugin_dir.join("plugin.yaml"),
            "metadata:\n  id: aspect-ratio\n  name: Aspect Ratio\n  version: 0.4.2\n",
        )
        .unwrap();

        let dir = temp_dir.path().to_string_lossy().into_owned();
        let lines = list_lines(&sub_matches(&["list", "--plugin-dir", &dir])).unwrap();

        assert!(lines.contains(&"  forms 0.5.0".to_string()));
        assert!(lines.contains(&"  typography 0.5.0".to_string()));
        assert!(lines.contains(&"  aspect-ratio 0.4.2".to_string()));
    }
}
