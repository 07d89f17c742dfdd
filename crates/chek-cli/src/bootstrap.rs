use std::path::Path;

use anyhow::Context;
use chek_config::ChekConfig;

/// Load layered configuration, including a `.env` file if present.
pub fn load_config() -> anyhow::Result<ChekConfig> {
    ChekConfig::load_with_dotenv().context("failed to load chek configuration")
}

/// Create the parent directory of a file-backed database.
pub fn ensure_database_dir(path: &str) -> anyhow::Result<()> {
    if path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create database directory {}", parent.display()))?;
    }
    Ok(())
}
