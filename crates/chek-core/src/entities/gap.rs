use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Benchmark gap for one KMA of a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GapEntry {
    #[serde(rename = "kma")]
    pub kma_name: String,
    /// `max(0, target_level - current_level)`.
    pub level_gap: u32,
    pub dependencies: Vec<String>,
    pub actions: Vec<String>,
    #[serde(rename = "check_tools", alias = "chek_tools")]
    pub tools: Vec<String>,
}
