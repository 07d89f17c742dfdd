use chek_config::ChekConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::load_catalog;
use crate::output::output;

/// Handle `chek catalog`.
pub fn handle(
    action: &CatalogCommands,
    config: &ChekConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::Show { path } => {
            let path = path.as_deref().unwrap_or(&config.roadmap.catalog_path);
            let catalog = load_catalog(path)?;
            tracing::debug!(path, areas = catalog.len(), "catalog loaded");
            output(&catalog.areas(), flags.format)
        }
    }
}
