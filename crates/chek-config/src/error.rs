//! Errors raised while loading CHEK settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `CHEK_` variable could not be read into the settings.
    #[error("could not load chek settings: {0}")]
    Figment(#[from] figment::Error),

    /// `roadmap.epoch` is not a calendar date.
    #[error("roadmap.epoch '{value}' is not a YYYY-MM-DD date: {reason}")]
    InvalidEpoch { value: String, reason: String },
}
