//! Benchmark catalog and scheduling configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_catalog_path() -> String {
    ".chek/benchmark.json".to_string()
}

fn default_epoch() -> String {
    "2025-01-01".to_string()
}

const fn default_months_per_level() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoadmapConfig {
    /// Path to the benchmark catalog JSON file.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Date the first remediation window opens, `YYYY-MM-DD`.
    #[serde(default = "default_epoch")]
    pub epoch: String,

    /// Months of remediation per missing maturity level.
    #[serde(default = "default_months_per_level")]
    pub months_per_level: u32,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            epoch: default_epoch(),
            months_per_level: default_months_per_level(),
        }
    }
}

impl RoadmapConfig {
    /// Parse the configured epoch.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEpoch` if `epoch` is not an ISO date.
    pub fn epoch_date(&self) -> Result<NaiveDate, ConfigError> {
        NaiveDate::parse_from_str(&self.epoch, "%Y-%m-%d").map_err(|e| {
            ConfigError::InvalidEpoch {
                value: self.epoch.clone(),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_epoch_parses() {
        let config = RoadmapConfig::default();
        assert_eq!(
            config.epoch_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(config.months_per_level, 3);
    }

    #[test]
    fn invalid_epoch_is_rejected() {
        let config = RoadmapConfig {
            epoch: "01/01/2025".into(),
            ..Default::default()
        };
        let err = config.epoch_date().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEpoch { ref value, .. } if value == "01/01/2025"));
        assert!(err.to_string().starts_with("roadmap.epoch '01/01/2025' is not a YYYY-MM-DD date"));
    }
}
