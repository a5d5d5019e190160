//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{
    paths,
    schema::{ColorMode, Config},
};
use anyhow::{Context, Result};
use std::path::Path;

const NAMESPACE_ENV: &str = "ODLM_NAMESPACE";
const OPERATORS_NAMESPACE_ENV: &str = "ODLM_OPERATORS_NAMESPACE";
const NO_COLOR_ENV: &str = "NO_COLOR";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    ///
    /// Command-line flags are applied on top by the caller.
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::root_config_path())
    }

    /// Same as [`ConfigLoader::load`] with an explicit config file location
    pub fn load_from(path: &Path) -> Result<Config> {
        let config = if path.exists() {
            Self::load_file(path)?
        } else {
            Self::load_defaults()
        };
        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // An empty file is a valid config with every key defaulted
        if contents.trim().is_empty() {
            return Ok(Self::load_defaults());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the config file at `path`, if there is one
    ///
    /// Fails on invalid YAML, unknown keys, wrong value types and
    /// namespaces that are not valid DNS-1123 labels.
    pub fn validate(path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let config = Self::load_file(path)?;

        if let Some(namespace) = &config.default_namespace {
            check_namespace("defaultNamespace", namespace)?;
        }
        check_namespace("operatorsNamespace", &config.operators_namespace)?;

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Some(namespace) = non_empty_env(NAMESPACE_ENV) {
            config.default_namespace = Some(namespace);
        }

        if let Some(namespace) = non_empty_env(OPERATORS_NAMESPACE_ENV) {
            config.operators_namespace = namespace;
        }

        // https://no-color.org: any non-empty value disables color
        if non_empty_env(NO_COLOR_ENV).is_some() {
            config.color = ColorMode::Never;
        }

        config
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn check_namespace(key: &str, value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && value.len() <= 63
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !value.starts_with('-')
        && !value.ends_with('-');

    if valid {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} '{}' is not a valid namespace name",
            key,
            value
        ))
    }
}
