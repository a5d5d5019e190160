//! Configuration for kubectl-odlm
//!
//! A single optional YAML file, overridden by environment variables and
//! then by command-line flags.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ColorMode, Config};

/// Configuration keys and their current values, in file order
pub fn config_entries(config: &Config) -> Vec<(&'static str, String)> {
    vec![
        (
            "defaultNamespace",
            config.default_namespace.clone().unwrap_or_default(),
        ),
        ("operatorsNamespace", config.operators_namespace.clone()),
        (
            "color",
            match config.color {
                ColorMode::Auto => "auto",
                ColorMode::Always => "always",
                ColorMode::Never => "never",
            }
            .to_string(),
        ),
    ]
}
