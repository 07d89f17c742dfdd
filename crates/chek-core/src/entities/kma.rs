use serde::{Deserialize, Deserializer, Serialize};

/// A key maturity area from the benchmark catalog.
///
/// The catalog is written by hand and mixes bare strings with lists, so the
/// list fields accept either form. Field names follow the catalog file
/// (`kma`, `check level`, `check tools`) with the canonical names accepted as
/// aliases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyMaturityArea {
    #[serde(rename = "kma", alias = "name")]
    pub name: String,
    /// Benchmark level to reach, 0..=5.
    #[serde(rename = "check level", alias = "target_level")]
    pub target_level: i32,
    /// Actions (of this or any other KMA) that must finish before this KMA starts.
    #[serde(default, deserialize_with = "one_or_many")]
    pub dependencies: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub actions: Vec<String>,
    #[serde(
        rename = "check tools",
        alias = "tools",
        alias = "check_tools",
        default,
        deserialize_with = "one_or_many"
    )]
    pub tools: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_strings_become_single_element_lists() {
        let kma: KeyMaturityArea = serde_json::from_str(
            r#"{
                "kma": "Permitting Software",
                "check level": 3,
                "dependencies": "No previous action needed",
                "actions": "Purchase Software License",
                "check tools": ["CHEK validator"]
            }"#,
        )
        .unwrap();

        assert_eq!(kma.name, "Permitting Software");
        assert_eq!(kma.target_level, 3);
        assert_eq!(kma.dependencies, vec!["No previous action needed"]);
        assert_eq!(kma.actions, vec!["Purchase Software License"]);
        assert_eq!(kma.tools, vec!["CHEK validator"]);
    }

    #[test]
    fn canonical_names_and_missing_lists() {
        let kma: KeyMaturityArea =
            serde_json::from_str(r#"{"name": "Legal Review", "target_level": 2}"#).unwrap();
        assert_eq!(kma.name, "Legal Review");
        assert!(kma.dependencies.is_empty());
        assert!(kma.actions.is_empty());
        assert!(kma.tools.is_empty());
    }
}
