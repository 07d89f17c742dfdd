use clap::{Subcommand, ValueEnum};

/// Which advisor builds the roadmap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AdvisorChoice {
    /// Deterministic dependency scheduler.
    Rule,
    /// Hosted chat model (needs advisor.api_key).
    Chat,
}

/// Roadmap commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RoadmapCommands {
    /// Build and store the roadmap from the stored gap snapshot.
    Evaluate {
        project: String,
        #[arg(long, value_enum, default_value = "rule")]
        advisor: AdvisorChoice,
        /// Language for actions and tools (defaults to general.language).
        #[arg(long)]
        language: Option<String>,
    },
    /// Show the stored roadmap.
    Get { project: String },
}
