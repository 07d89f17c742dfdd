//! Advisor error types.

use chek_roadmap::RoadmapError;
use thiserror::Error;

use crate::TokenUsage;

/// Errors that can occur while asking an advisor for a roadmap.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The chat advisor has no API key or base URL.
    #[error("advisor is not configured: set advisor.api_key")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The advisor API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response could not be read as a roadmap at all.
    #[error("parse error: {0}")]
    Parse(String),

    /// The roadmap was read but rejected, or could not be scheduled.
    #[error(transparent)]
    Roadmap(#[from] RoadmapError),

    /// The model answered but the reply was unusable. The tokens were still
    /// billed.
    #[error("reply from {} was rejected", usage.model)]
    Rejected {
        usage: TokenUsage,
        #[source]
        source: Box<AdvisorError>,
    },
}

impl AdvisorError {
    /// Tokens spent before the request failed, if the provider answered.
    #[must_use]
    pub const fn usage(&self) -> Option<&TokenUsage> {
        match self {
            Self::Rejected { usage, .. } => Some(usage),
            _ => None,
        }
    }
}
