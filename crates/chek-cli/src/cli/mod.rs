use chek_config::ChekConfig;
use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `chek` binary.
#[derive(Debug, Parser)]
#[command(
    name = "chek",
    version,
    about = "CHEK - building permit maturity benchmarks and roadmaps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Act as this user (defaults to general.default_user)
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self, config: &ChekConfig) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            user: self
                .user
                .clone()
                .unwrap_or_else(|| config.general.default_user.clone()),
        }
    }
}
