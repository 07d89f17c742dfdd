//! # chek-advisor
//!
//! Maturity advisors turn a project's benchmark gaps into a roadmap.
//!
//! - [`RuleAdvisor`]: the deterministic dependency scheduler from `chek-roadmap`
//! - [`ChatAdvisor`]: a hosted chat model behind an OpenAI-compatible API
//!
//! Whatever the advisor, the returned roadmap has passed the same schema and
//! invariant checks, so the caller can persist it as-is.

mod chat;
mod error;
mod http;
pub mod parse;
pub mod prompt;
mod rule;

use std::future::Future;

use chek_core::entities::{GapEntry, RoadmapEntry};
use serde::{Deserialize, Serialize};

pub use chat::ChatAdvisor;
pub use error::AdvisorError;
pub use rule::RuleAdvisor;

/// Tokens billed for one advisor call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub model: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

/// A validated roadmap plus what it cost to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorOutcome {
    /// One entry per gap, in gap order.
    pub entries: Vec<RoadmapEntry>,
    /// `None` when no model was called.
    pub usage: Option<TokenUsage>,
}

/// Produces a roadmap from benchmark gaps.
pub trait MaturityAdvisor {
    /// Build a roadmap for `gaps`, with free text in `language`.
    ///
    /// Failures are terminal for the request; implementations do not retry.
    fn advise(
        &self,
        gaps: &[GapEntry],
        language: &str,
    ) -> impl Future<Output = Result<AdvisorOutcome, AdvisorError>> + Send;
}
