//! Result Normalizer
//!
//! Converts the untrusted, possibly malformed JSON reply of the remote model
//! into a [`NormalizedResult`]. Never fails: malformed JSON, wrong shapes and
//! out-of-range values all collapse into a degraded but structurally valid
//! result, so callers never branch on "did normalization fail".

use serde_json::{Map, Value};

use crate::config::ScoreWeights;
use crate::models::{Issue, IssueCategory, NormalizedResult, ScoreSet, Severity};

/// Summary used when the model omits one.
const DEFAULT_SUMMARY: &str = "Analysis completed";

/// Description used when an issue entry omits one.
const NO_DESCRIPTION: &str = "No description provided";

/// Fixed recommendations attached to every degraded result.
const FAILURE_RECOMMENDATIONS: [&str; 2] = [
    "Please check your code syntax and try again",
    "Ensure your API key is valid and has sufficient credits",
];

/// Normalize a raw model reply into a well-typed result.
///
/// The reply is parsed as JSON and each field is defaulted, clamped or
/// dropped per the rules below; a reply that cannot be parsed at all yields
/// the degraded result from [`NormalizedResult::failure`].
#[must_use]
pub fn normalize(reply_text: &str, weights: &ScoreWeights) -> NormalizedResult {
    let raw: Value = match serde_json::from_str(reply_text) {
        Ok(value) => value,
        Err(err) => {
            return NormalizedResult::failure(&format!("Failed to parse AI response: {err}"));
        }
    };

    let Some(reply) = raw.as_object() else {
        return NormalizedResult::failure("AI response is not a JSON object");
    };

    let scores = normalize_scores(reply.get("scores"));
    let overall_score = reconcile_overall_score(reply.get("overall_score"), scores, weights);

    NormalizedResult {
        overall_score,
        scores,
        issues: validate_issues(reply.get("issues")),
        recommendations: coerce_recommendations(reply.get("recommendations")),
        summary: match reply.get("summary") {
            None | Some(Value::Null) => DEFAULT_SUMMARY.to_string(),
            Some(value) => lossy_string(value),
        },
    }
}

impl NormalizedResult {
    /// The uniform degraded result for a failed analysis.
    ///
    /// Same fixed shape for transport failures, malformed JSON and schema
    /// mismatches: zero scores, one High issue carrying the message, and the
    /// two standard recovery recommendations.
    #[must_use]
    pub fn failure(message: &str) -> Self {
        Self {
            overall_score: 0.0,
            scores: ScoreSet::uniform(0),
            issues: vec![Issue {
                category: IssueCategory::Quality,
                severity: Severity::High,
                description: format!("Analysis failed: {message}"),
                line: None,
                code: None,
            }],
            recommendations: FAILURE_RECOMMENDATIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            summary: format!("Analysis failed due to: {message}"),
        }
    }
}

/// Build the score record from the raw `scores` value.
///
/// Starts from the neutral defaults; numeric values for the three known keys
/// overwrite them after rounding and clamping to [1,10]. Non-numeric values
/// retain the default and unknown keys are dropped.
fn normalize_scores(raw: Option<&Value>) -> ScoreSet {
    let Some(Value::Object(map)) = raw else {
        return ScoreSet::default();
    };

    ScoreSet {
        quality: score_for(map, "Quality"),
        security: score_for(map, "Security"),
        performance: score_for(map, "Performance"),
    }
}

fn score_for(map: &Map<String, Value>, key: &str) -> u8 {
    map.get(key)
        .and_then(Value::as_f64)
        .map_or(ScoreSet::DEFAULT_SCORE, clamp_score)
}

fn clamp_score(value: f64) -> u8 {
    value.round().clamp(1.0, 10.0) as u8
}

/// Decide whether to trust the model's overall score or recompute it.
///
/// A supplied score of exactly 5 is indistinguishable from the omitted-field
/// default and is always recomputed from the weighted per-axis scores, as are
/// absent, non-numeric and zero values. Anything else passes through, rounded
/// to one decimal and clamped to [0,10].
#[allow(clippy::float_cmp)]
fn reconcile_overall_score(raw: Option<&Value>, scores: ScoreSet, weights: &ScoreWeights) -> f64 {
    match raw.and_then(Value::as_f64) {
        Some(value) if value != 0.0 && value != 5.0 => round_one_decimal(value.clamp(0.0, 10.0)),
        _ => round_one_decimal(weights.weighted_sum(scores)),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reshape the raw `issues` array, keeping order and dropping non-objects.
fn validate_issues(raw: Option<&Value>) -> Vec<Issue> {
    let Some(Value::Array(entries)) = raw else {
        return Vec::new();
    };

    entries.iter().filter_map(issue_from_entry).collect()
}

fn issue_from_entry(entry: &Value) -> Option<Issue> {
    let entry = entry.as_object()?;

    Some(Issue {
        category: entry
            .get("type")
            .and_then(Value::as_str)
            .and_then(IssueCategory::from_wire)
            .unwrap_or_default(),
        severity: entry
            .get("severity")
            .and_then(Value::as_str)
            .and_then(Severity::from_wire)
            .unwrap_or_default(),
        description: match entry.get("description") {
            None | Some(Value::Null) => NO_DESCRIPTION.to_string(),
            Some(value) => lossy_string(value),
        },
        line: entry
            .get("line")
            .and_then(Value::as_u64)
            .and_then(|line| u32::try_from(line).ok()),
        code: entry.get("code").and_then(Value::as_str).map(str::to_string),
    })
}

/// A bare string becomes a one-element list; array elements are preserved in
/// order with nulls dropped.
fn coerce_recommendations(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::String(single)) => vec![single.clone()],
        Some(Value::Array(entries)) => entries
            .iter()
            .filter(|entry| !entry.is_null())
            .map(lossy_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Strings pass through verbatim; anything else renders as its JSON text.
fn lossy_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
