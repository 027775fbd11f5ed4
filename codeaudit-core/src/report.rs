//! Report rendering
//!
//! Markdown export of a [`NormalizedResult`] with a fixed template, plus the
//! score banding used by the terminal frontend.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::models::NormalizedResult;

/// Qualitative band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// Band boundaries: >= 8 excellent, >= 6 good, >= 4 fair, else poor.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Render the Markdown audit report.
///
/// The timestamp is passed in so rendering stays pure; callers stamp with
/// `Utc::now()`.
#[must_use]
pub fn render_markdown(result: &NormalizedResult, generated_at: DateTime<Utc>) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "# AI Code Audit Report");
    let _ = writeln!(report);
    let _ = writeln!(
        report,
        "**Generated:** {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(report, "**Overall Score:** {}/10", result.overall_score);
    let _ = writeln!(report);
    let _ = writeln!(report, "## Scores");
    let _ = writeln!(report, "- Quality: {}/10", result.scores.quality);
    let _ = writeln!(report, "- Security: {}/10", result.scores.security);
    let _ = writeln!(report, "- Performance: {}/10", result.scores.performance);
    let _ = writeln!(report);
    let _ = writeln!(report, "## Issues Found");
    for issue in &result.issues {
        let _ = writeln!(report, "- {}: {}", issue.category, issue.description);
    }
    let _ = writeln!(report);
    let _ = writeln!(report, "## Recommendations");
    for recommendation in &result.recommendations {
        let _ = writeln!(report, "- {recommendation}");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, IssueCategory, ScoreSet, Severity};
    use chrono::TimeZone;

    fn sample_result() -> NormalizedResult {
        NormalizedResult {
            overall_score: 6.3,
            scores: ScoreSet {
                quality: 8,
                security: 6,
                performance: 4,
            },
            issues: vec![Issue {
                category: IssueCategory::Security,
                severity: Severity::High,
                description: "unparameterized query".to_string(),
                line: Some(12),
                code: None,
            }],
            recommendations: vec!["Use prepared statements".to_string()],
            summary: "Needs attention".to_string(),
        }
    }

    #[test]
    fn test_markdown_template() {
        let generated_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let report = render_markdown(&sample_result(), generated_at);

        assert!(report.starts_with("# AI Code Audit Report"));
        assert!(report.contains("**Generated:** 2024-06-01 12:30:00"));
        assert!(report.contains("**Overall Score:** 6.3/10"));
        assert!(report.contains("- Quality: 8/10"));
        assert!(report.contains("- Security: 6/10"));
        assert!(report.contains("- Performance: 4/10"));
        assert!(report.contains("- Security: unparameterized query"));
        assert!(report.contains("- Use prepared statements"));
    }

    #[test]
    fn test_empty_sections_render() {
        let mut result = sample_result();
        result.issues.clear();
        result.recommendations.clear();

        let report = render_markdown(&result, Utc::now());
        assert!(report.contains("## Issues Found"));
        assert!(report.contains("## Recommendations"));
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(9.1), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(8.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(6.5), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(4.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Poor);
    }
}
