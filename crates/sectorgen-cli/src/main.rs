use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sectorgen_core::write_sectors;

mod config;
mod error;

use config::GenConfig;

#[derive(Parser)]
#[command(
    name = "make-test-file",
    version,
    about = "Write a fixture of 512-byte sector records to stdout"
)]
struct Cli {
    /// Number of sectors to generate
    #[arg(allow_negative_numbers = true)]
    sector_count: Option<i64>,
}

fn main() -> ExitCode {
    // stdout carries the fixture bytes, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(raw) = cli.sector_count else {
        eprintln!("{}", config::usage());
        return ExitCode::FAILURE;
    };

    match run(raw) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error::format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(raw: i64) -> anyhow::Result<()> {
    let config = GenConfig::from_arg(raw)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = write_sectors(config.sector_count, &mut out)
        .context("failed to write sectors to stdout")?;

    tracing::info!(sectors = summary.sectors, bytes = summary.bytes, "fixture written");
    Ok(())
}
