//! Repository modules implementing persistence for all CHEK entities.
//!
//! Each module adds methods to `ChekService` via `impl ChekService` blocks.

pub mod gap;
pub mod project;
pub mod roadmap;
pub mod score;
pub mod usage;
