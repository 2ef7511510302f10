use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use type_tour::{demonstrate_all_types, run_basics, VERSION};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the walkthrough
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!(version = VERSION, "starting type tour");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_basics(&mut out).context("Failed to write basics walkthrough")?;
    demonstrate_all_types(&mut out).context("Failed to write type walkthrough")?;
    out.flush().context("Failed to flush stdout")?;

    info!("type tour finished");

    Ok(())
}
