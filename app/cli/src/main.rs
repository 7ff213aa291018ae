//! skillcheck - consistency checker for skill-definition documents.
//!
//! Validates every skill directory under a corpus root and prints a
//! per-document pass/fail report. The process exits non-zero when any
//! document produces an error-severity diagnostic or the root is missing;
//! warnings alone never fail the run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use skillcheck_validate::Reporter;
use skillcheck_validate::RuleConfig;
use skillcheck_validate::RuleEngine;
use skillcheck_validate::Summary;
use skillcheck_validate::run_report;

#[derive(Parser)]
#[command(name = "skillcheck")]
#[command(about = "Validate skill documents for consistency")]
struct Cli {
    /// Root directory containing one subdirectory per skill
    #[arg(default_value = ".claude/skills")]
    root: PathBuf,

    /// Disable ANSI colors in the report
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) if !summary.has_errors() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Summary> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skillcheck_validate=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let color =
        !cli.no_color && supports_color::on(supports_color::Stream::Stdout).is_some();

    let engine = RuleEngine::new(RuleConfig::default());
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), color);

    let summary = run_report(&cli.root, &engine, &mut reporter)?;
    Ok(summary)
}
