use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

/// Input fed to the transform on every run.
const INPUT: u32 = 10;

#[derive(Parser)]
#[command(name = "mod4-transform")]
#[command(version, about = "Print the mod-4 selected transform of 10")]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Cli {} = Cli::parse();

    let result = mod4_transform::target(INPUT);
    tracing::debug!(input = INPUT, result, "computed transform");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{result}").context("Failed to write result to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
