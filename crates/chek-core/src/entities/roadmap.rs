use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scheduled remediation window for one KMA.
///
/// Dates serialize as ISO 8601 (`2025-01-01`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoadmapEntry {
    #[serde(rename = "kma")]
    pub kma_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub dependencies: Vec<String>,
    pub actions: Vec<String>,
    #[serde(rename = "check_tools")]
    pub tools: Vec<String>,
}

impl RoadmapEntry {
    /// A zero-length window with no work attached.
    #[must_use]
    pub fn settled(kma_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            kma_name: kma_name.into(),
            start_date: date,
            end_date: date,
            dependencies: Vec::new(),
            actions: Vec::new(),
            tools: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.start_date == self.end_date
            && self.dependencies.is_empty()
            && self.actions.is_empty()
            && self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let entry = RoadmapEntry::settled("Legal Review", date);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kma"], "Legal Review");
        assert_eq!(json["start_date"], "2025-01-01");
        assert_eq!(json["end_date"], "2025-01-01");
        assert!(json["check_tools"].as_array().unwrap().is_empty());
        assert!(entry.is_settled());
    }
}
