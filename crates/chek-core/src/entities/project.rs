use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A building permit assessment project owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub building_permit_instructions: Option<String>,
    pub maturity_assessment: bool,
    pub questionnaire_submitted: bool,
    pub roadmap_created: bool,
    pub report_created: bool,
    pub created_at: DateTime<Utc>,
}
