use clap::Subcommand;

/// Benchmark catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Show the key maturity areas of the catalog.
    Show {
        /// Catalog file (defaults to roadmap.catalog_path).
        #[arg(long)]
        path: Option<String>,
    },
}
