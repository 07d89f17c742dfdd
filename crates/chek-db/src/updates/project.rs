//! Project update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_permit_instructions: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_assessment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire_submitted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_created: Option<bool>,
}

impl ProjectUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.building_permit_instructions.is_none()
            && self.maturity_assessment.is_none()
            && self.questionnaire_submitted.is_none()
            && self.roadmap_created.is_none()
            && self.report_created.is_none()
    }
}

#[derive(Default)]
pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn building_permit_instructions(mut self, instructions: Option<String>) -> Self {
        self.0.building_permit_instructions = Some(instructions);
        self
    }

    #[must_use]
    pub fn maturity_assessment(mut self, done: bool) -> Self {
        self.0.maturity_assessment = Some(done);
        self
    }

    #[must_use]
    pub fn questionnaire_submitted(mut self, done: bool) -> Self {
        self.0.questionnaire_submitted = Some(done);
        self
    }

    #[must_use]
    pub fn roadmap_created(mut self, done: bool) -> Self {
        self.0.roadmap_created = Some(done);
        self
    }

    #[must_use]
    pub fn report_created(mut self, done: bool) -> Self {
        self.0.report_created = Some(done);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}
