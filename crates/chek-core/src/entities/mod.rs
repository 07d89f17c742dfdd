//! Entity structs for all CHEK domain objects.
//!
//! Persisted entities map to tables in the libSQL database (see
//! `chek-db/migrations`). Structs that cross a validation boundary also derive
//! `JsonSchema`.

mod gap;
mod kma;
mod project;
mod roadmap;
mod score;
mod usage;

pub use gap::GapEntry;
pub use kma::KeyMaturityArea;
pub use project::Project;
pub use roadmap::RoadmapEntry;
pub use score::MaturityScore;
pub use usage::AdvisorUsage;
