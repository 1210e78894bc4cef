//! CLI entrypoint for the klib fixture generator.

use std::path::PathBuf;

use clap::Parser;
use klibc_fixtures::emitter::{DEFAULT_OUTPUT_DIR, FixtureEmitter, run_id};
use klibc_fixtures::structured_log::LogEmitter;
use klibc_fixtures::{parse_seed, verify_all};

/// Generate self-checking C test programs for klib.
#[derive(Debug, Parser)]
#[command(name = "klibc-fixtures")]
#[command(about = "Generate self-checking C fixtures for klib string and printf routines")]
struct Cli {
    /// Directory receiving the `<routine>_test.c` files.
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Seed for the memcpy payloads (decimal or 0x...).
    #[arg(long, default_value = "0xDEAD_BEEF")]
    seed: String,
    /// Write structured JSONL logs to this path instead of stderr.
    #[arg(long)]
    log: Option<PathBuf>,
    /// Disable structured logging.
    #[arg(long)]
    quiet: bool,
    /// Write the artifact index JSON to this path.
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Re-derive every expectation after writing and fail on mismatch.
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let seed = parse_seed(&cli.seed)?;
    let run = run_id(seed);

    let mut log = if cli.quiet {
        LogEmitter::sink(&run)
    } else if let Some(path) = &cli.log {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        LogEmitter::to_file(path, &run)?
    } else {
        LogEmitter::to_stderr(&run)
    };

    let report = FixtureEmitter::new(&cli.output_dir, seed).emit(&mut log)?;
    println!(
        "Generated {} fixture files in {}",
        report.file_count(),
        report.output_dir.display()
    );

    if let Some(path) = cli.manifest {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, report.index.to_json()?)?;
        eprintln!("Wrote artifact index to {}", path.display());
    }

    if cli.verify {
        let summary = verify_all(&report.fixtures);
        eprintln!(
            "Verification complete: total={}, passed={}, failed={}",
            summary.total, summary.passed, summary.failed
        );
        for failure in summary.failures() {
            eprintln!(
                "  {} / {}: expected {}, got {}",
                failure.routine.symbol(),
                failure.case_name,
                failure.expected,
                failure.actual
            );
        }
        if !summary.all_passed() {
            return Err("fixture verification failed".into());
        }
    }

    Ok(())
}
