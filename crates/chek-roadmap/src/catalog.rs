//! Benchmark catalog of key maturity areas.

use std::collections::HashSet;
use std::path::Path;

use chek_core::MAX_LEVEL;
use chek_core::entities::KeyMaturityArea;
use serde::Deserialize;

use crate::error::RoadmapError;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(rename = "Key Maturity Areas", alias = "key_maturity_areas")]
    areas: Vec<KeyMaturityArea>,
}

/// The authoritative list of KMAs with their target levels, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    areas: Vec<KeyMaturityArea>,
}

impl Catalog {
    /// Build a catalog from already-parsed areas.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::CatalogInvalid` on a duplicate KMA name or a
    /// target level outside `0..=5`.
    pub fn new(areas: Vec<KeyMaturityArea>) -> Result<Self, RoadmapError> {
        let mut seen = HashSet::new();
        for area in &areas {
            if !seen.insert(area.name.as_str()) {
                return Err(RoadmapError::CatalogInvalid(format!(
                    "duplicate KMA '{}'",
                    area.name
                )));
            }
            if !(0..=MAX_LEVEL).contains(&area.target_level) {
                return Err(RoadmapError::CatalogInvalid(format!(
                    "target level {} for '{}' is outside 0..={MAX_LEVEL}",
                    area.target_level, area.name
                )));
            }
        }
        Ok(Self { areas })
    }

    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::CatalogInvalid` if the JSON does not have the
    /// catalog shape or fails [`Catalog::new`] checks.
    pub fn from_json(json: &str) -> Result<Self, RoadmapError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| RoadmapError::CatalogInvalid(e.to_string()))?;
        Self::new(file.areas)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::CatalogUnavailable` if the file cannot be read,
    /// otherwise the errors of [`Catalog::from_json`].
    pub fn load(path: &Path) -> Result<Self, RoadmapError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| RoadmapError::CatalogUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), kmas = catalog.len(), "loaded benchmark catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeyMaturityArea> {
        self.areas.iter().find(|area| area.name == name)
    }

    #[must_use]
    pub fn areas(&self) -> &[KeyMaturityArea] {
        &self.areas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
