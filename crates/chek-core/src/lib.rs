//! # chek-core
//!
//! Core types, ID prefixes, and error types for the CHEK building permit
//! maturity assessment.
//!
//! This crate provides the foundational types shared across all CHEK crates:
//! - Entity structs (KMA definitions, maturity scores, gap and roadmap entries, projects)
//! - The maturity category enum
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;

/// Lowest level a maturity score may carry. `-1` marks an unassessed area.
pub const MIN_CURRENT_LEVEL: i32 = -1;

/// Highest level on the maturity rubric.
pub const MAX_LEVEL: i32 = 5;

/// Dependency sentinel used by the benchmark catalog for "no prerequisite".
pub const NO_DEPENDENCY_SENTINEL: &str = "No previous action needed";
