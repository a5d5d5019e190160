//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};

use crate::tree::OPERATORS_NAMESPACE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Namespace to look for OperandRequests in.
    /// Unset means the namespace of the current kubeconfig context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,

    /// Namespace that cluster-scoped operators are installed into
    #[serde(default = "default_operators_namespace")]
    pub operators_namespace: String,

    /// When to style table output
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn default_operators_namespace() -> String {
    OPERATORS_NAMESPACE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: None,
            operators_namespace: default_operators_namespace(),
            color: ColorMode::default(),
        }
    }
}
