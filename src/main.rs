//! kubectl-odlm - show the operators and operands behind ODLM OperandRequests
//!
//! Installed on `PATH` this is picked up by kubectl as `kubectl odlm`.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cli::{ConfigSubcommand, GlobalOptions};

/// Show the operators and operands generated by OperandRequests
#[derive(Parser, Debug)]
#[command(name = "kubectl-odlm")]
#[command(about = "Show the operators and operands generated by OperandRequests", long_about = None)]
struct Args {
    /// Enable debug logging to stderr
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Show operator and operand generated by OperandRequest
    Tree {
        /// OperandRequest name; all requests in the namespace when omitted
        name: Option<String>,
    },
    /// Display version information
    Version,
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);

    match args.command {
        Command::Tree { name } => cli::run_tree(&args.global, name.as_deref()).await,
        Command::Version => {
            cli::display_version();
            Ok(())
        }
        Command::Config { subcommand } => cli::handle_config_command(subcommand),
    }
}
