//! CodeAudit Core - Data Model and Result Normalization
//!
//! This crate provides the deterministic core of CodeAudit:
//! - Data models for analysis requests and normalized results
//! - The result normalizer that repairs untrusted model replies
//! - Configuration, language detection, history and report rendering
//!
//! Everything here is pure and synchronous; the HTTP transport lives in
//! `codeaudit-llm` and the terminal frontend in `codeaudit-cli`.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod history;
pub mod language;
pub mod models;
pub mod normalize;
pub mod report;

// Re-export commonly used types for convenience
pub use config::{AuditorConfig, ScoreWeights};
pub use history::{AnalysisHistory, HistoryEntry, HistoryStatistics};
pub use language::{detect_language, FALLBACK_LANGUAGE};
pub use models::{
    AnalysisRequest, Issue, IssueCategory, NormalizedResult, ScoreSet, Severity,
};
pub use normalize::normalize;
pub use report::{render_markdown, ScoreBand};

/// Result type used throughout CodeAudit core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CodeAudit core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
