//! Advisor backed by an OpenAI-compatible chat completions API.

use std::time::Duration;

use chek_config::AdvisorConfig;
use chek_core::entities::GapEntry;
use chek_roadmap::ScheduleOptions;
use chek_schema::SchemaRegistry;
use serde::{Deserialize, Serialize};

use crate::http::check_response;
use crate::parse::parse_roadmap_content;
use crate::prompt::{ChatMessage, roadmap_messages};
use crate::{AdvisorError, AdvisorOutcome, MaturityAdvisor, TokenUsage};

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

impl CompletionResponse {
    fn into_parts(self, requested_model: &str) -> Result<(String, TokenUsage), AdvisorError> {
        let billed = self.usage.unwrap_or(Usage {
            prompt_tokens: 0,
            completion_tokens: 0,
        });
        let usage = TokenUsage {
            model: self.model.unwrap_or_else(|| requested_model.to_string()),
            prompt_tokens: billed.prompt_tokens,
            completion_tokens: billed.completion_tokens,
        };
        match self.choices.into_iter().next().and_then(|choice| choice.message.content) {
            Some(content) => Ok((content, usage)),
            None => Err(AdvisorError::Rejected {
                usage,
                source: Box::new(AdvisorError::Parse("reply has no message content".into())),
            }),
        }
    }
}

/// Asks a hosted chat model for the roadmap and validates the answer.
pub struct ChatAdvisor {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
    options: ScheduleOptions,
    schema: SchemaRegistry,
}

impl ChatAdvisor {
    /// Build a client from the advisor configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::NotConfigured`] without an API key, or
    /// [`AdvisorError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AdvisorConfig, options: ScheduleOptions) -> Result<Self, AdvisorError> {
        if !config.is_configured() {
            return Err(AdvisorError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent("chek/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            options,
            schema: SchemaRegistry::new(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<CompletionResponse, AdvisorError> {
        let body = CompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages,
        };
        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

impl MaturityAdvisor for ChatAdvisor {
    async fn advise(&self, gaps: &[GapEntry], language: &str) -> Result<AdvisorOutcome, AdvisorError> {
        let messages = roadmap_messages(gaps, &self.options, language);
        tracing::info!(model = %self.model, kmas = gaps.len(), language, "requesting roadmap from chat advisor");

        let reply = self.complete(messages).await?;
        self.accept_reply(reply, gaps)
            .inspect_err(|e| tracing::warn!(error = %e, "chat advisor roadmap rejected"))
    }
}

impl ChatAdvisor {
    /// Turn a completion into a checked roadmap. Usage travels with the
    /// outcome either way so billed tokens can be recorded on rejection.
    fn accept_reply(
        &self,
        reply: CompletionResponse,
        gaps: &[GapEntry],
    ) -> Result<AdvisorOutcome, AdvisorError> {
        let (content, usage) = reply.into_parts(&self.model)?;
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "chat advisor replied"
        );

        match parse_roadmap_content(&content, gaps, &self.options, &self.schema) {
            Ok(entries) => Ok(AdvisorOutcome {
                entries,
                usage: Some(usage),
            }),
            Err(source) => Err(AdvisorError::Rejected {
                usage,
                source: Box::new(source),
            }),
        }
    }
}
