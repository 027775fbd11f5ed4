//! Analysis Request and Result Models
//!
//! Fixed-shape records for the audit pipeline. The remote model's reply is
//! untrusted, so the result side uses a closed score record and enumerated
//! issue taxonomies instead of open-ended maps; invalid keys and values are
//! rejected at the normalization boundary.

use serde::{Deserialize, Serialize};

use crate::language::{detect_language, FALLBACK_LANGUAGE};

/// A single code snippet submitted for analysis.
///
/// Immutable once constructed; the detected language is derived from the
/// filename extension at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Source code to analyze
    pub code: String,
    /// Name of the file being analyzed
    pub filename: String,
    /// Language detected from the filename extension
    pub language: String,
    /// Request code quality and style analysis
    pub include_style: bool,
    /// Request security vulnerability analysis
    pub include_security: bool,
    /// Request performance optimization analysis
    pub include_performance: bool,
}

impl AnalysisRequest {
    /// Create a request with all three analysis aspects enabled.
    pub fn new(code: impl Into<String>, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let language = detect_language(&filename)
            .unwrap_or(FALLBACK_LANGUAGE)
            .to_string();

        Self {
            code: code.into(),
            filename,
            language,
            include_style: true,
            include_security: true,
            include_performance: true,
        }
    }

    /// Select which analysis aspects to request.
    #[must_use]
    pub fn with_aspects(mut self, style: bool, security: bool, performance: bool) -> Self {
        self.include_style = style;
        self.include_security = security;
        self.include_performance = performance;
        self
    }
}

/// Per-axis scores, always exactly these three fields.
///
/// Serialized with the capitalized keys the model is instructed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreSet {
    /// Code quality score (1-10)
    pub quality: u8,
    /// Security score (1-10)
    pub security: u8,
    /// Performance score (1-10)
    pub performance: u8,
}

impl ScoreSet {
    /// The neutral default used when the model omits a score.
    pub const DEFAULT_SCORE: u8 = 5;

    /// All three axes set to the same value.
    #[must_use]
    pub const fn uniform(value: u8) -> Self {
        Self {
            quality: value,
            security: value,
            performance: value,
        }
    }
}

impl Default for ScoreSet {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_SCORE)
    }
}

/// Analysis axis an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueCategory {
    Quality,
    Security,
    Performance,
}

impl IssueCategory {
    /// Parse the wire spelling; anything unrecognized is `None`.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Quality" => Some(Self::Quality),
            "Security" => Some(Self::Security),
            "Performance" => Some(Self::Performance),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "Quality",
            Self::Security => "Security",
            Self::Performance => "Performance",
        }
    }
}

impl Default for IssueCategory {
    fn default() -> Self {
        Self::Quality
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parse the wire spelling; anything unrecognized is `None`.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            "Critical" => Some(Self::Critical),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single issue reported by the model, reshaped into a closed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Analysis axis the issue belongs to
    #[serde(rename = "type")]
    pub category: IssueCategory,
    /// Issue severity
    pub severity: Severity,
    /// Human-readable description
    pub description: String,
    /// Line number, when the model supplied one
    pub line: Option<u32>,
    /// Offending code snippet, when the model supplied one
    pub code: Option<String>,
}

/// The validated output of one analysis, successful or degraded.
///
/// Append-only: a result is constructed once per analysis and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// Overall score in [0,10], one decimal precision
    pub overall_score: f64,
    /// Per-axis scores, always exactly three fields
    pub scores: ScoreSet,
    /// Issues in the order the model reported them
    pub issues: Vec<Issue>,
    /// Actionable recommendations
    pub recommendations: Vec<String>,
    /// Brief analysis summary
    pub summary: String,
}

impl NormalizedResult {
    /// Whether any reported issue is at or above the given severity.
    #[must_use]
    pub fn has_issues_at_least(&self, severity: Severity) -> bool {
        self.issues.iter().any(|issue| issue.severity >= severity)
    }

    /// Issue count per severity, in `Critical..Low` order.
    #[must_use]
    pub fn severity_counts(&self) -> [(Severity, usize); 4] {
        let count = |severity| {
            self.issues
                .iter()
                .filter(|issue| issue.severity == severity)
                .count()
        };
        [
            (Severity::Critical, count(Severity::Critical)),
            (Severity::High, count(Severity::High)),
            (Severity::Medium, count(Severity::Medium)),
            (Severity::Low, count(Severity::Low)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_detects_language() {
        let request = AnalysisRequest::new("fn main() {}", "main.rs");
        assert_eq!(request.language, "rust");
        assert!(request.include_style);
        assert!(request.include_security);
        assert!(request.include_performance);
    }

    #[test]
    fn test_request_falls_back_to_python() {
        let request = AnalysisRequest::new("...", "notes.xyz");
        assert_eq!(request.language, "python");
    }

    #[test]
    fn test_aspect_selection() {
        let request = AnalysisRequest::new("x = 1", "a.py").with_aspects(false, true, false);
        assert!(!request.include_style);
        assert!(request.include_security);
        assert!(!request.include_performance);
    }

    #[test]
    fn test_score_set_wire_keys() {
        let scores = ScoreSet {
            quality: 8,
            security: 6,
            performance: 4,
        };
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["Quality"], 8);
        assert_eq!(json["Security"], 6);
        assert_eq!(json["Performance"], 4);
    }

    #[test]
    fn test_issue_wire_shape() {
        let issue = Issue {
            category: IssueCategory::Security,
            severity: Severity::Critical,
            description: "SQL injection".to_string(),
            line: Some(42),
            code: None,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "Security");
        assert_eq!(json["severity"], "Critical");
        assert_eq!(json["line"], 42);
    }

    #[test]
    fn test_taxonomy_parsing() {
        assert_eq!(IssueCategory::from_wire("Quality"), Some(IssueCategory::Quality));
        assert_eq!(IssueCategory::from_wire("Unknown"), None);
        assert_eq!(Severity::from_wire("Critical"), Some(Severity::Critical));
        assert_eq!(Severity::from_wire("Blocker"), None);
    }

    #[test]
    fn test_severity_counts() {
        let result = NormalizedResult {
            overall_score: 5.0,
            scores: ScoreSet::default(),
            issues: vec![
                Issue {
                    category: IssueCategory::Quality,
                    severity: Severity::High,
                    description: "a".to_string(),
                    line: None,
                    code: None,
                },
                Issue {
                    category: IssueCategory::Security,
                    severity: Severity::High,
                    description: "b".to_string(),
                    line: None,
                    code: None,
                },
            ],
            recommendations: Vec::new(),
            summary: String::new(),
        };

        assert!(result.has_issues_at_least(Severity::High));
        assert!(!result.has_issues_at_least(Severity::Critical));
        assert_eq!(result.severity_counts()[1], (Severity::High, 2));
    }
}
