//! Advisor backed by the deterministic scheduler.

use chek_core::entities::GapEntry;
use chek_roadmap::{ScheduleOptions, schedule};

use crate::{AdvisorError, AdvisorOutcome, MaturityAdvisor};

/// Schedules gaps locally. Never calls out, never bills tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAdvisor {
    options: ScheduleOptions,
}

impl RuleAdvisor {
    #[must_use]
    pub const fn new(options: ScheduleOptions) -> Self {
        Self { options }
    }
}

impl MaturityAdvisor for RuleAdvisor {
    async fn advise(&self, gaps: &[GapEntry], _language: &str) -> Result<AdvisorOutcome, AdvisorError> {
        let entries = schedule(gaps, &self.options)?;
        tracing::debug!(count = entries.len(), "rule advisor scheduled roadmap");
        Ok(AdvisorOutcome {
            entries,
            usage: None,
        })
    }
}
