//! Dependency-ordered roadmap scheduling.

use chek_core::entities::{GapEntry, RoadmapEntry};
use chrono::{Months, NaiveDate};

use crate::error::RoadmapError;
use crate::graph::DependencyGraph;

/// Calendar parameters of a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    /// Earliest start date of any remediation window.
    pub epoch: NaiveDate,
    /// Months of remediation per missing level.
    pub months_per_level: u32,
}

impl ScheduleOptions {
    #[must_use]
    pub const fn new(epoch: NaiveDate, months_per_level: u32) -> Self {
        Self {
            epoch,
            months_per_level,
        }
    }

    /// Length of the remediation window for a gap, in months.
    #[must_use]
    pub const fn duration_months(&self, level_gap: u32) -> u32 {
        self.months_per_level.saturating_mul(level_gap)
    }

    /// `start` plus the window for `level_gap`, or `None` past the calendar's end.
    #[must_use]
    pub fn end_date(&self, start: NaiveDate, level_gap: u32) -> Option<NaiveDate> {
        start.checked_add_months(Months::new(self.duration_months(level_gap)))
    }
}

impl Default for ScheduleOptions {
    /// Epoch 2025-01-01, three months per level.
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            months_per_level: 3,
        }
    }
}

/// Schedule one remediation window per gap entry.
///
/// Independent KMAs all start at the epoch. A KMA whose dependencies name
/// actions of other KMAs starts at the latest end date among them. Zero-gap
/// KMAs collapse to an empty window at the epoch and never hold anyone back.
/// The result has the same order as `gaps`.
///
/// # Errors
///
/// - `RoadmapError::CyclicDependency` if the action dependencies loop.
/// - `RoadmapError::DateOverflow` if a window runs past the calendar.
pub fn schedule(
    gaps: &[GapEntry],
    options: &ScheduleOptions,
) -> Result<Vec<RoadmapEntry>, RoadmapError> {
    let graph = DependencyGraph::build(gaps);
    let order = graph.order()?;

    let mut scheduled: Vec<Option<RoadmapEntry>> = vec![None; gaps.len()];
    for index in order {
        let gap = &gaps[index];
        if gap.level_gap == 0 {
            scheduled[index] = Some(RoadmapEntry::settled(&gap.kma_name, options.epoch));
            continue;
        }

        let start = graph
            .prerequisites(index)
            .into_iter()
            .filter_map(|p| scheduled[p].as_ref().map(|entry| entry.end_date))
            .fold(options.epoch, NaiveDate::max);
        let end = options
            .end_date(start, gap.level_gap)
            .ok_or_else(|| RoadmapError::DateOverflow {
                kma: gap.kma_name.clone(),
            })?;

        tracing::debug!(kma = %gap.kma_name, %start, %end, "scheduled KMA");
        scheduled[index] = Some(RoadmapEntry {
            kma_name: gap.kma_name.clone(),
            start_date: start,
            end_date: end,
            dependencies: gap.dependencies.clone(),
            actions: gap.actions.clone(),
            tools: gap.tools.clone(),
        });
    }

    Ok(scheduled.into_iter().flatten().collect())
}
