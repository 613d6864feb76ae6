//! Configuration module.
//!
//! This module defines the command-line interface (CLI) using `clap`.

use clap::Parser;
use std::path::PathBuf;

/// Prints the external debug file identity of ELF binaries.
///
/// The identity combines the `.gnu_debuglink` filename and CRC32 with the GNU build-ID hash.
/// Static archives are reported member by member.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Input binaries or archives
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Do not fail when an object has no debug identity
    #[arg(long)]
    pub missing_ok: bool,

    /// Log level (error, warn, info, debug, trace); defaults to RUST_LOG, then "warn"
    #[arg(long, help = "Set the logging level")]
    pub log_level: Option<String>,
}
