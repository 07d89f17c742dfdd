use clap::Subcommand;

/// Maturity score commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScoreCommands {
    /// Set one score, merging by label.
    Set {
        project: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        label: String,
        /// Current level, -1 (unassessed) to 5.
        #[arg(long, allow_negative_numbers = true)]
        level: i32,
        #[arg(long)]
        justification: Option<String>,
    },
    /// Import the scores of one category from a JSON file of
    /// `[{"label", "level", "justification"?}]`.
    Import {
        project: String,
        #[arg(long)]
        category: String,
        file: String,
    },
    /// List scores.
    List {
        project: String,
        #[arg(long)]
        category: Option<String>,
    },
}
