//! # chek-config
//!
//! Layered configuration loading for CHEK using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHEK_*` prefix, `__` as separator)
//! 2. Project-level `.chek/config.toml`
//! 3. User-level `~/.config/chek/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CHEK_ADVISOR__API_KEY` -> `advisor.api_key`,
//! `CHEK_ROADMAP__EPOCH` -> `roadmap.epoch`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use chek_config::ChekConfig;
//!
//! let config = ChekConfig::load_with_dotenv().expect("config");
//!
//! if config.advisor.is_configured() {
//!     println!("Advisor model: {}", config.advisor.model);
//! }
//! ```

mod advisor;
mod database;
mod error;
mod general;
mod roadmap;

pub use advisor::AdvisorConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use roadmap::RoadmapConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChekConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub roadmap: RoadmapConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ChekConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory (or a
    /// parent) before building the figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".chek/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CHEK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chek").join("config.toml"))
    }
}
