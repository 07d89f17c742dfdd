use anyhow::Context;
use chek_config::ChekConfig;
use chek_db::service::ChekService;
use chek_roadmap::{Catalog, ScheduleOptions};

use crate::bootstrap;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ChekService,
    pub config: ChekConfig,
    pub options: ScheduleOptions,
}

impl AppContext {
    /// Open the database and resolve scheduling options from config.
    pub async fn init(config: ChekConfig) -> anyhow::Result<Self> {
        let options = schedule_options(&config)?;

        bootstrap::ensure_database_dir(&config.database.path)?;
        let service = ChekService::new_local(&config.database.path)
            .await
            .context("failed to initialize chek-db service")?;

        Ok(Self {
            service,
            config,
            options,
        })
    }

    /// Load the benchmark catalog named by `roadmap.catalog_path`.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        load_catalog(&self.config.roadmap.catalog_path)
    }
}

pub fn schedule_options(config: &ChekConfig) -> anyhow::Result<ScheduleOptions> {
    let epoch = config
        .roadmap
        .epoch_date()
        .context("invalid roadmap.epoch")?;
    Ok(ScheduleOptions::new(epoch, config.roadmap.months_per_level))
}

pub fn load_catalog(path: &str) -> anyhow::Result<Catalog> {
    Catalog::load(std::path::Path::new(path)).context("failed to load benchmark catalog")
}

#[cfg(test)]
mod tests {
    use chek_config::ChekConfig;
    use chrono::NaiveDate;

    use super::{AppContext, schedule_options};

    #[test]
    fn options_follow_roadmap_config() {
        let mut config = ChekConfig::default();
        config.roadmap.epoch = "2026-03-01".to_string();
        config.roadmap.months_per_level = 2;

        let options = schedule_options(&config).unwrap();
        assert_eq!(options.epoch, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(options.months_per_level, 2);
    }

    #[test]
    fn bad_epoch_is_reported() {
        let mut config = ChekConfig::default();
        config.roadmap.epoch = "first of january".to_string();

        let err = schedule_options(&config).unwrap_err();
        assert!(format!("{err:#}").contains("roadmap.epoch"));
    }

    #[tokio::test]
    async fn init_opens_in_memory_database() {
        let mut config = ChekConfig::default();
        config.database.path = ":memory:".to_string();

        let ctx = AppContext::init(config).await.unwrap();
        assert!(ctx.service.list_projects("local").await.unwrap().is_empty());
    }
}
