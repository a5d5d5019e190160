//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod config;
mod logging;
mod tree;
mod version;

pub use config::{ConfigSubcommand, handle_config_command};
pub use logging::init_logging;
pub use tree::run_tree;
pub use version::display_version;

use std::path::PathBuf;

/// Cluster selection and output flags shared by every subcommand
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Namespace of the OperandRequests
    #[arg(long, short = 'n', global = true)]
    pub namespace: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
