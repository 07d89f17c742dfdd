//! # chek-schema
//!
//! JSON Schema generation, validation, and registry for CHEK.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas of CHEK entities
//! - Validation of untrusted JSON (advisor output, score imports) before it is
//!   deserialized into typed entities
//!
//! Entity types are defined in `chek-core` with `#[derive(JsonSchema)]`.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;

/// Registry name of the roadmap entry schema.
pub const ROADMAP_ENTRY: &str = "roadmap_entry";

/// Registry name of the maturity score schema.
pub const MATURITY_SCORE: &str = "maturity_score";
