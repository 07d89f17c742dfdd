mod benchmark;
mod catalog;
mod project;
mod roadmap;
mod score;

pub use benchmark::BenchmarkCommands;
pub use catalog::CatalogCommands;
pub use project::ProjectCommands;
pub use roadmap::{AdvisorChoice, RoadmapCommands};
pub use score::ScoreCommands;
