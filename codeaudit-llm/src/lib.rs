//! CodeAudit LLM - Prompt Construction and Hosted-Model Client
//!
//! This crate owns the boundary to the remote model:
//! - The prompt builder assembling the (system, user) instruction pair
//! - The OpenAI-compatible chat-completions client
//! - The [`CodeAuditor`] orchestrator whose `analyze` never fails: every
//!   transport or reply problem collapses into the degraded result from
//!   `codeaudit-core`

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auditor;
pub mod openai;
pub mod prompt;

// Re-export main types for convenience
pub use auditor::CodeAuditor;
pub use openai::OpenAiClient;
pub use prompt::{build_prompts, SYSTEM_PROMPT};

/// Result type for LLM operations
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Error types for LLM operations
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API
    #[error("API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Reply carried no message content
    #[error("model reply contained no content")]
    NoContent,
}
