//! Entry point for the debug-identity tool.
//!
//! 1. Parse command-line arguments using `clap`.
//! 2. Set up logging.
//! 3. Inspect every input and print one line per object found.
//!
//! Error handling is done via `anyhow`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use debug_identity::config::Config;
use debug_identity::loader::inspect_path;

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = match &config.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut missing = 0usize;
    for path in &config.inputs {
        for report in inspect_path(path)? {
            match report.identity {
                Some(id) => println!("{}: {}", report.name, id),
                None => {
                    missing += 1;
                    println!("{}: no external debug identity", report.name);
                }
            }
        }
    }

    if missing > 0 && !config.missing_ok {
        anyhow::bail!("{} object(s) without an external debug identity", missing);
    }
    Ok(())
}
