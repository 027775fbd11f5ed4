//! CodeAudit CLI Entry Point
//!
//! Terminal frontend for the audit pipeline: analyze files with the hosted
//! model, render result cards, export Markdown reports and print session
//! statistics.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;

use codeaudit_core::{
    language, render_markdown, AnalysisHistory, AnalysisRequest, AuditorConfig,
};
use codeaudit_llm::CodeAuditor;

mod display;

#[derive(Parser)]
#[command(name = "codeaudit")]
#[command(about = "CodeAudit - AI-powered code quality, security and performance audits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze source files with the hosted model
    Analyze {
        /// Files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Skip code quality and style analysis
        #[arg(long)]
        no_style: bool,

        /// Skip security vulnerability analysis
        #[arg(long)]
        no_security: bool,

        /// Skip performance optimization analysis
        #[arg(long)]
        no_performance: bool,

        /// Model to use for analysis
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Configuration file path (TOML; defaults to environment variables)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Directory to write Markdown audit reports into
        #[arg(short = 'e', long)]
        export: Option<PathBuf>,

        /// Print results as JSON instead of the result card
        #[arg(long)]
        json: bool,
    },

    /// Print the supported file extensions and their languages
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Analyze {
            files,
            no_style,
            no_security,
            no_performance,
            model,
            config,
            export,
            json,
        } => {
            run_analyze(AnalyzeArgs {
                files,
                no_style,
                no_security,
                no_performance,
                model,
                config,
                export,
                json,
            })
            .await
        }
        Commands::Languages => {
            run_languages();
            Ok(())
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

struct AnalyzeArgs {
    files: Vec<PathBuf>,
    no_style: bool,
    no_security: bool,
    no_performance: bool,
    model: Option<String>,
    config: Option<PathBuf>,
    export: Option<PathBuf>,
    json: bool,
}

async fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => AuditorConfig::from_file(path)?,
        None => AuditorConfig::from_env()?,
    };
    if let Some(model) = args.model {
        config.model = model;
    }

    let auditor = CodeAuditor::new(config);
    let mut history = AnalysisHistory::new();

    for file in &args.files {
        let code = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let filename = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("code.py");

        let request = AnalysisRequest::new(code, filename).with_aspects(
            !args.no_style,
            !args.no_security,
            !args.no_performance,
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Analyzing {filename}..."));
        spinner.enable_steady_tick(Duration::from_millis(120));
        let result = auditor.analyze(&request).await;
        spinner.finish_and_clear();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            display::render_result(&request.filename, &result);
        }

        if let Some(dir) = &args.export {
            let report_path = export_report(dir, file, &result)?;
            println!("Report written to {}", report_path.display());
        }

        history.record(&request.filename, &result);
    }

    if history.len() > 1 && !args.json {
        display::render_statistics(&history.statistics());
    }

    Ok(())
}

fn export_report(
    dir: &Path,
    source: &Path,
    result: &codeaudit_core::NormalizedResult,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("code");
    let report_path = dir.join(format!("{stem}_audit.md"));

    std::fs::write(&report_path, render_markdown(result, Utc::now()))
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    Ok(report_path)
}

fn run_languages() {
    println!("Supported file extensions:");
    for (extension, name) in language::EXTENSION_LANGUAGES {
        println!("  .{extension:<6} {name}");
    }
    println!(
        "Unrecognized extensions are analyzed as {}.",
        language::FALLBACK_LANGUAGE
    );
}
