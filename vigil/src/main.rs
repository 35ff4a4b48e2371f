use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vigil_core::{Checker, CheckerConfig, Error};

mod output;

use output::{BaselineOutput, CheckOutput, OutputWriter, render_baseline, render_report};

/// Vigil - a directory-snapshot integrity checker
#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Directory-snapshot integrity checker using BLAKE3", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to monitor (defaults to VIGIL_DIR env var or .)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Baseline artifact path (defaults to ./file_baseline.json)
    #[arg(long, global = true)]
    baseline: Option<PathBuf>,

    /// Content snapshot artifact path (defaults to ./file_contents.json)
    #[arg(long, global = true)]
    contents: Option<PathBuf>,

    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record the current directory state as the expected baseline
    Baseline,

    /// Compare the current directory state against the baseline
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine monitored directory: CLI arg > VIGIL_DIR env var > cwd
    let dir = cli
        .dir
        .or_else(|| std::env::var("VIGIL_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = CheckerConfig::new(dir);
    if let Some(baseline) = cli.baseline {
        config.baseline_path = baseline;
    }
    if let Some(contents) = cli.contents {
        config.contents_path = contents;
    }

    let writer = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Baseline => cmd_baseline(config, &writer),
        Commands::Check => cmd_check(config, &writer),
    }
}

fn cmd_baseline(config: CheckerConfig, writer: &OutputWriter) -> Result<()> {
    let checker = Checker::new(config);

    let stats = checker.create_baseline().with_context(|| {
        format!(
            "Failed to create baseline for {}",
            checker.config().directory.display()
        )
    })?;

    let output = BaselineOutput::new(
        &stats,
        checker.config().baseline_path.display().to_string(),
        checker.config().contents_path.display().to_string(),
    );
    writer.write(&output, || render_baseline(&output))
}

fn cmd_check(config: CheckerConfig, writer: &OutputWriter) -> Result<()> {
    let checker = Checker::new(config);

    let report = match checker.check() {
        Ok(report) => report,
        Err(err @ Error::MissingBaseline { .. }) => {
            return Err(anyhow::Error::new(err)
                .context("Baseline not found. Run 'vigil baseline' first."));
        }
        Err(err) => {
            let dir = checker.config().directory.display().to_string();
            return Err(
                anyhow::Error::new(err).context(format!("Failed to check integrity of {}", dir))
            );
        }
    };

    let output = CheckOutput::new(report);
    writer.write(&output, || render_report(&output.report))
}
