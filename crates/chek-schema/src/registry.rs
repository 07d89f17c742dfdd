//! Central schema registry for CHEK types.
//!
//! The `SchemaRegistry` builds JSON Schemas from chek-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of JSON Schemas for CHEK entities.
///
/// Provides lookup by name and validation of arbitrary JSON values against
/// registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity and response schemas from
    /// chek-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types ---
        register!(schemas, "project", chek_core::entities::Project);
        register!(schemas, crate::MATURITY_SCORE, chek_core::entities::MaturityScore);
        register!(schemas, "gap_entry", chek_core::entities::GapEntry);
        register!(schemas, crate::ROADMAP_ENTRY, chek_core::entities::RoadmapEntry);
        register!(schemas, "advisor_usage", chek_core::entities::AdvisorUsage);

        // --- CLI response types ---
        register!(
            schemas,
            "benchmark_response",
            chek_core::responses::BenchmarkResponse
        );
        register!(
            schemas,
            "roadmap_response",
            chek_core::responses::RoadmapResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Unknown` if the schema name is unknown, or
    /// `SchemaError::Mismatch` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::Unknown(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compile {
                schema: name.to_string(),
                reason: e.to_string(),
            })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Mismatch {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
