//! Build command implementation
//!
//! The build command drives the full pipeline:
//! 1. Resolve configuration (CLI flags over config file over defaults)
//! 2. Register include search directories
//! 3. Scan the include graph into an ordered queue and system-header set
//! 4. Render the single output stream, optionally stripping comments
//! 5. Write the amalgamated header to disk

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use log::warn;

use amalgamate::config::{self, FileConfig, Overrides, Settings};
use amalgamate::defaults;
use amalgamate::output::{emoji, OutputConfig};
use amalgamate::resolver::IncludeDirs;
use amalgamate::scanner::Scanner;
use amalgamate::stripper;
use amalgamate::writer::Writer;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Root directory of the header tree to scan
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Destination directory for the emitted file (must already exist)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Base name for the emitted file; the final filename is `<name>.h`
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Remove comments from the emitted header
    #[arg(long)]
    pub strip: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "AMALGAMATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Additional include search directory (repeatable, searched after the
    /// base directory)
    #[arg(long = "include-dir", value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Glob pattern for files to skip during entry discovery (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs, out: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    let file_config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(
        Overrides {
            base: args.base,
            output: args.output,
            name: args.name,
            strip: args.strip,
            include_dirs: args.include_dirs,
            exclude: args.exclude,
        },
        file_config,
    );

    if !settings.base.is_dir() {
        anyhow::bail!("Base directory not found: {}", settings.base.display());
    }

    if !args.quiet {
        println!(
            "{} Amalgamating {}",
            emoji(out, "🔍", "[SCAN]"),
            settings.base.display()
        );
        println!();
    }

    let mut include_dirs = IncludeDirs::new();
    include_dirs.add(&settings.base);
    include_dirs.add(settings.base.join(defaults::DETAIL_SUBDIR));
    for dir in &settings.include_dirs {
        if !include_dirs.add(dir) {
            warn!("include directory not found: {}", dir.display());
        }
    }

    let scanner = Scanner::new(include_dirs, &settings.exclude)?;
    let scan = scanner.scan_tree()?;

    if !args.quiet && args.verbose {
        println!(
            "   {} headers ordered, {} system includes found",
            scan.queue.len(),
            scan.system_headers.len()
        );
    }

    let writer = Writer::new(settings.preamble.clone())?;
    let mut text = writer.render(&scan)?;

    if settings.strip {
        text = stripper::strip(&text)?;
    }

    let dest = writer.write(&settings.output, &settings.name, &text)?;

    if !args.quiet {
        println!(
            "{} Amalgamated {} headers in {:.2}s",
            emoji(out, "✅", "[OK]"),
            scan.queue.len(),
            start_time.elapsed().as_secs_f64()
        );
        println!(
            "   {} system includes hoisted",
            scan.system_headers.len()
        );
        println!("   Written to: {}", dest.display());
    }

    Ok(())
}

/// Load the configuration file: an explicit `--config` path must exist; with
/// no flag, `.amalgamate.yaml` in the working directory is used when present.
fn load_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            Ok(config::from_file(path)?)
        }
        None => {
            let default = Path::new(defaults::CONFIG_FILE_NAME);
            if default.exists() {
                Ok(config::from_file(default)?)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}
