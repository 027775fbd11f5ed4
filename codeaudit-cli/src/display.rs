//! Terminal rendering of analysis results

use codeaudit_core::{HistoryStatistics, NormalizedResult, ScoreBand};

/// Print the result card for one analyzed file.
pub fn render_result(filename: &str, result: &NormalizedResult) {
    let band = ScoreBand::from_score(result.overall_score);

    println!();
    println!("=== {filename} ===");
    println!("Overall score: {}/10 ({band})", result.overall_score);
    println!("  Quality:     {}/10", result.scores.quality);
    println!("  Security:    {}/10", result.scores.security);
    println!("  Performance: {}/10", result.scores.performance);

    println!();
    if result.issues.is_empty() {
        println!("No issues found.");
    } else {
        println!("Issues found:");
        for issue in &result.issues {
            match issue.line {
                Some(line) => println!(
                    "  [{}] {} (line {}): {}",
                    issue.severity, issue.category, line, issue.description
                ),
                None => println!(
                    "  [{}] {}: {}",
                    issue.severity, issue.category, issue.description
                ),
            }
            if let Some(code) = &issue.code {
                println!("      > {code}");
            }
        }
    }

    if !result.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for (index, recommendation) in result.recommendations.iter().enumerate() {
            println!("  {}. {recommendation}", index + 1);
        }
    }

    println!();
    println!("Summary: {}", result.summary);
}

/// Print session statistics after a multi-file run.
pub fn render_statistics(stats: &HistoryStatistics) {
    println!();
    println!("Session statistics:");
    println!("  Analyses run:  {}", stats.total_analyses);
    if let Some(average) = stats.average_score {
        println!("  Average score: {average}/10");
    }
    if let Some(latest) = stats.latest_analysis {
        println!("  Last analysis: {}", latest.format("%Y-%m-%d %H:%M:%S"));
    }
}
