//! Prompt Builder
//!
//! Assembles the fixed system instruction and the per-request user
//! instruction. Pure functions of the request; no truncation or length
//! validation happens here.

use codeaudit_core::AnalysisRequest;

/// Fixed system instruction mandating the JSON reply schema.
pub const SYSTEM_PROMPT: &str = r#"You are an expert code reviewer and security analyst. Your job is to analyze code for:

1. CODE QUALITY: Readability, maintainability, best practices, design patterns
2. SECURITY: Vulnerabilities, unsafe practices, potential exploits
3. PERFORMANCE: Efficiency, optimization opportunities, resource usage

You must respond with a valid JSON object containing:
{
    "overall_score": <number 1-10>,
    "scores": {
        "Quality": <number 1-10>,
        "Security": <number 1-10>,
        "Performance": <number 1-10>
    },
    "issues": [
        {
            "type": "Quality|Security|Performance",
            "severity": "Low|Medium|High|Critical",
            "description": "Clear description of the issue",
            "line": <line number or null>,
            "code": "problematic code snippet or null"
        }
    ],
    "recommendations": [
        "Specific actionable recommendation"
    ],
    "summary": "Brief summary of the analysis"
}

Be thorough but constructive. Focus on actionable feedback."#;

/// Build the (system, user) prompt pair for a request.
#[must_use]
pub fn build_prompts(request: &AnalysisRequest) -> (&'static str, String) {
    (SYSTEM_PROMPT, build_user_prompt(request))
}

/// Build the user instruction: language, filename, the enabled aspects in
/// fixed order, and the code in a fenced block labeled with the language.
#[must_use]
pub fn build_user_prompt(request: &AnalysisRequest) -> String {
    let aspects = aspect_list(request).join(", ");

    format!(
        r#"Please analyze this {language} code file ({filename}) for {aspects}.

Code to analyze:
```{language}
{code}
```

Focus on:
- Code quality: readability, maintainability, best practices, naming conventions
- Security: potential vulnerabilities, unsafe operations, input validation
- Performance: efficiency, algorithm complexity, resource usage
- Specific issues with line numbers when possible
- Actionable recommendations for improvement

Provide scores from 1-10 (10 being excellent) and specific, actionable feedback."#,
        language = request.language,
        filename = request.filename,
        code = request.code,
    )
}

fn aspect_list(request: &AnalysisRequest) -> Vec<&'static str> {
    let mut aspects = Vec::new();
    if request.include_style {
        aspects.push("code quality and style");
    }
    if request.include_security {
        aspects.push("security vulnerabilities");
    }
    if request.include_performance {
        aspects.push("performance optimization");
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_mandates_schema() {
        assert!(SYSTEM_PROMPT.contains("overall_score"));
        assert!(SYSTEM_PROMPT.contains("\"Quality\""));
        assert!(SYSTEM_PROMPT.contains("\"Security\""));
        assert!(SYSTEM_PROMPT.contains("\"Performance\""));
        assert!(SYSTEM_PROMPT.contains("recommendations"));
    }

    #[test]
    fn test_user_prompt_interpolation() {
        let request = AnalysisRequest::new("fn main() {}", "main.rs");
        let prompt = build_user_prompt(&request);

        assert!(prompt.contains("this rust code file (main.rs)"));
        assert!(prompt.contains(
            "code quality and style, security vulnerabilities, performance optimization"
        ));
        assert!(prompt.contains("```rust\nfn main() {}\n```"));
    }

    #[test]
    fn test_aspect_order_is_fixed() {
        let request =
            AnalysisRequest::new("x = 1", "a.py").with_aspects(true, false, true);
        let prompt = build_user_prompt(&request);

        assert!(prompt.contains("for code quality and style, performance optimization."));
        assert!(!prompt.contains("security vulnerabilities"));
    }

    #[test]
    fn test_all_aspects_disabled_still_well_formed() {
        let request =
            AnalysisRequest::new("print('hi')", "a.py").with_aspects(false, false, false);
        let (system, user) = build_prompts(&request);

        assert!(!system.is_empty());
        assert!(user.contains("for .\n"));
        assert!(user.contains("```python\nprint('hi')\n```"));
    }

    #[test]
    fn test_unknown_extension_labels_fence_python() {
        let request = AnalysisRequest::new("data", "blob.bin");
        let prompt = build_user_prompt(&request);
        assert!(prompt.contains("```python"));
    }
}
