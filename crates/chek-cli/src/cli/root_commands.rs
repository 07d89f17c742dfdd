use clap::Subcommand;

use crate::cli::subcommands::{
    BenchmarkCommands, CatalogCommands, ProjectCommands, RoadmapCommands, ScoreCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Assessment projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Maturity scores per category.
    Score {
        #[command(subcommand)]
        action: ScoreCommands,
    },
    /// Inspect the benchmark catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Benchmark gaps between scores and the catalog.
    Benchmark {
        #[command(subcommand)]
        action: BenchmarkCommands,
    },
    /// Remediation roadmaps.
    Roadmap {
        #[command(subcommand)]
        action: RoadmapCommands,
    },
}
