//! CLI argument parsing and dispatch

use anyhow::Result;
use clap::Parser;

use amalgamate::output::{ColorChoice, OutputConfig};

use crate::commands;

/// Amalgamate - Collapse a header-only library into a single header
#[derive(Parser, Debug)]
#[command(name = "amalgamate")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    build: commands::build::BuildArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;
        let output = OutputConfig::new(ColorChoice::parse(&self.color));

        commands::build::execute(self.build, &output)
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = level
        .parse::<log::LevelFilter>()
        .map_err(|_| anyhow::anyhow!("invalid log level: {level}"))?;

    // try_init: in-process callers (tests) may execute more than once
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .try_init();

    Ok(())
}
