//! Chat prompt for roadmap generation.

use chek_core::entities::GapEntry;
use chek_roadmap::{ScheduleOptions, render_gap_entries};
use serde::{Deserialize, Serialize};

/// One chat message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: String) -> Self {
        Self {
            role: role.to_string(),
            content,
        }
    }
}

/// System instructions: scheduling rules, output format, target language.
#[must_use]
pub fn system_prompt(options: &ScheduleOptions, language: &str) -> String {
    let months = options.months_per_level;
    let epoch = options.epoch;
    format!(
        "You turn benchmark gaps of a building permit process into a remediation roadmap.\n\
         Each KMA (key maturity area) comes with its level difference between the current \
         and the target maturity, its dependencies, actions, and check tools.\n\
         \n\
         Rules:\n\
         - Replace the level difference with a start_date and an end_date (YYYY-MM-DD).\n\
         - Each level of difference takes {months} months: end_date = start_date + {months} months per level.\n\
         - Dependencies name actions, possibly of other KMAs. A KMA starts no earlier than the \
         end_date of every KMA whose actions it depends on.\n\
         - A KMA without such dependencies starts on {epoch}.\n\
         - If the level difference is 0, start_date and end_date are both {epoch} and \
         dependencies, actions, and check_tools are empty lists.\n\
         - Return every KMA exactly once, in the given order.\n\
         \n\
         Answer with a JSON array only, each element shaped as:\n\
         {{\"kma\": \"string\", \"start_date\": \"YYYY-MM-DD\", \"end_date\": \"YYYY-MM-DD\", \
         \"dependencies\": [\"string\"], \"actions\": [\"string\"], \"check_tools\": [\"string\"]}}\n\
         \n\
         Translate actions and check tools into {language}. Keep KMA names and dependency \
         texts exactly as given."
    )
}

/// The system and user messages for one roadmap request.
#[must_use]
pub fn roadmap_messages(
    gaps: &[GapEntry],
    options: &ScheduleOptions,
    language: &str,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::new("system", system_prompt(options, language)),
        ChatMessage::new("user", render_gap_entries(gaps)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn system_prompt_carries_calendar_and_language() {
        let options = ScheduleOptions::new(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), 4);
        let prompt = system_prompt(&options, "German");
        assert!(prompt.contains("2026-03-01"));
        assert!(prompt.contains("4 months"));
        assert!(prompt.contains("into German"));
        assert!(prompt.contains("\"check_tools\""));
    }

    #[test]
    fn user_message_is_rendered_gaps() {
        let gaps = [GapEntry {
            kma_name: "Legal Review".into(),
            level_gap: 1,
            dependencies: Vec::new(),
            actions: vec!["Review statutes".into()],
            tools: Vec::new(),
        }];
        let messages = roadmap_messages(&gaps, &ScheduleOptions::default(), "English");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.starts_with("KMA: Legal Review\nLevel Difference: 1\n"));
    }
}
