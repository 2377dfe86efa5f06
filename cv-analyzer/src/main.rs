use anyhow::Context;
use clap::Parser;
use extractors::CvAnalyzer;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

mod config;
mod output;

use crate::config::{AnalyzerConfig, OutputFormat};
use crate::output::FileReport;

/// Analyze résumé files (PDF, DOCX, PPTX) into missions, skills and contact details.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Résumé files to analyze
    #[arg(required_unless_present = "print_config")]
    files: Vec<PathBuf>,

    /// Output format; overrides `[output] format` from the config file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Config file to use instead of the per-user one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    #[arg(long)]
    log_file_path: Option<String>,
}

/// Install the global subscriber. When logging to a file, the returned guard
/// must outlive the last log call or buffered records are lost.
fn init_tracing(log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("cv-analyzer.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
        None
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_file_path.as_deref());

    let (config, config_path) =
        AnalyzerConfig::load(args.config.as_deref()).context("Failed to load config")?;
    tracing::info!("Using config {}", config_path.display());

    if args.print_config {
        let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
        print!("{}", rendered);
        return Ok(());
    }

    let format = args.format.unwrap_or(config.output.format);
    let analyzer = CvAnalyzer::with_options(config.analysis.clone());

    let mut reports = Vec::with_capacity(args.files.len());
    let mut failures = 0;
    for path in &args.files {
        match analyzer.analyze_file(path) {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    eprintln!("{}: {}", path.display(), warning);
                }
                let report = FileReport::new(path, outcome);
                eprintln!("{}: quality score {}/100", path.display(), report.quality_score());
                reports.push(report);
            }
            Err(e) => {
                tracing::error!("Cannot analyze {}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    let rendered = output::render(&reports, format).context("Failed to render report")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if failures > 0 {
        anyhow::bail!("{} of {} files could not be analyzed", failures, args.files.len());
    }
    Ok(())
}
