//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "English".to_string()
}

fn default_user() -> String {
    "local".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Language the advisor writes roadmap text in.
    #[serde(default = "default_language")]
    pub language: String,

    /// Owner recorded on rows when no `--user` is given.
    #[serde(default = "default_user")]
    pub default_user: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            default_user: default_user(),
        }
    }
}
