use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Assessed maturity level of one KMA for a project.
///
/// `current_level` is `-1` when the area has not been assessed yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MaturityScore {
    #[serde(rename = "label", alias = "kma_name")]
    pub kma_name: String,
    #[serde(rename = "level", alias = "current_level")]
    pub current_level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl MaturityScore {
    pub fn new(kma_name: impl Into<String>, current_level: i32) -> Self {
        Self {
            kma_name: kma_name.into(),
            current_level,
            justification: None,
        }
    }

    /// Whether the level lies on the rubric (`-1..=5`).
    #[must_use]
    pub const fn level_in_range(&self) -> bool {
        self.current_level >= crate::MIN_CURRENT_LEVEL && self.current_level <= crate::MAX_LEVEL
    }

    /// # Errors
    ///
    /// Returns `CoreError::LevelOutOfRange` when the level is off the rubric.
    pub fn check_level(&self) -> Result<(), CoreError> {
        if self.level_in_range() {
            return Ok(());
        }
        Err(CoreError::LevelOutOfRange {
            label: self.kma_name.clone(),
            level: self.current_level,
            min: crate::MIN_CURRENT_LEVEL,
            max: crate::MAX_LEVEL,
        })
    }
}
