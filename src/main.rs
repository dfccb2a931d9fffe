//! # Amalgamate CLI
//!
//! This is the binary entry point for the `amalgamate` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging and console output configuration.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The core logic lives in the `amalgamate` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
