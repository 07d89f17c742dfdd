//! # chek-roadmap
//!
//! Benchmark gap calculation and roadmap scheduling for CHEK.
//!
//! Everything here is pure and synchronous: plain data in, plain data out.
//! Persistence of the results is the caller's job (see `chek-db`).
//!
//! - [`Catalog`]: the benchmark catalog of key maturity areas (KMAs)
//! - [`compute_gaps`]: per-KMA level gaps between a project's scores and the catalog
//! - [`schedule`]: start/end dates per KMA, ordered by action dependencies
//! - [`validate_roadmap`]: checks an externally produced roadmap against the
//!   same invariants the scheduler guarantees

mod catalog;
mod error;
mod gap;
mod graph;
mod schedule;
mod validate;

pub use catalog::Catalog;
pub use error::RoadmapError;
pub use gap::{compute_gaps, render_gap_entries};
pub use graph::DependencyGraph;
pub use schedule::{ScheduleOptions, schedule};
pub use validate::validate_roadmap;
