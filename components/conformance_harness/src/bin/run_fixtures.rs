//! Transform fixture runner.
//!
//! Runs the engine over `<name>.in.<ext>` / `<name>.out.<ext>` pairs in a
//! flat `fixtures/` directory. The engine is invoked with both paths and
//! asserts its produced transformation against the expected output itself;
//! the harness only observes the exit status.

use clap::Parser;
use conformance_harness::{Category, Harness, HarnessResult, DEFAULT_TIMEOUT_MS};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "run_fixtures",
    about = "Run transform fixture pairs against an engine"
)]
struct Cli {
    /// Path to the engine-under-test executable
    #[arg(long)]
    engine: PathBuf,

    /// Corpus root containing a fixtures/ directory of .in/.out pairs
    #[arg(long)]
    corpus: PathBuf,

    /// Per-fixture timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Write the run summary as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> HarnessResult<bool> {
    let harness = Harness::new(&cli.engine)
        .with_timeout_ms(cli.timeout_ms)
        .with_progress(true);

    let started = Instant::now();
    let summary = harness.run(&cli.corpus, &[Category::Transform])?;
    let duration = started.elapsed();

    println!();
    print!("{}", summary.render());
    println!(
        "Success count: {}",
        summary.total_evaluated() - summary.total_mismatched()
    );
    println!("Error count: {}", summary.total_mismatched());
    println!("Time: {:.2}s", duration.as_secs_f64());

    if let Some(path) = &cli.json {
        fs::write(path, summary.to_json()?)?;
    }

    Ok(summary.is_success())
}
