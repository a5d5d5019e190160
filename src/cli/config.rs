//! Configuration subcommands

use anyhow::{Context, Result};
use clap::Subcommand;

use kubectl_odlm::config::{ConfigLoader, config_entries, paths};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show configuration file path
    Path,
    /// List the effective configuration
    List,
    /// Validate the configuration file
    Validate,
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            for (key, value) in config_entries(&config) {
                println!("{}: {}", key, value);
            }
        }
        ConfigSubcommand::Validate => {
            let path = paths::root_config_path();
            ConfigLoader::validate(&path).context("Configuration validation failed")?;
            println!("Configuration is valid");
        }
    }

    Ok(())
}
