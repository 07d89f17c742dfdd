use clap::Subcommand;

/// Benchmark commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BenchmarkCommands {
    /// Compute and store the gap snapshot of a project.
    Evaluate { project: String },
    /// Show the stored gap snapshot.
    Get {
        project: String,
        /// Print the advisor text rendering instead of structured output.
        #[arg(long)]
        text: bool,
    },
}
