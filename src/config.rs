//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.amalgamate.yaml` configuration file, as well as the logic for parsing
//! it and merging it with CLI overrides.
//!
//! ## Key Components
//!
//! - **`FileConfig`**: The raw, all-optional schema of the YAML file.
//! - **`Overrides`**: Values supplied on the command line; every field wins
//!   over its `FileConfig` counterpart.
//! - **`Settings`**: The fully resolved configuration a run executes with.
//!   Precedence is CLI flag > configuration file > built-in default.
//! - **`Preamble`**: The attribution block written at the top of the
//!   amalgamated header (project URL, copyright holder, SPDX license id).
//!
//! ## Parsing
//!
//! The `parse` function is the entry point for parsing a YAML string into a
//! `FileConfig`. Unknown keys are rejected so that a typo in the file is a
//! hard error with a hint, not a silently ignored setting.

use std::path::PathBuf;

use serde::Deserialize;

use crate::defaults;
use crate::error::{Error, Result};

/// Attribution block emitted at the top of the amalgamated header.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preamble {
    /// Project URL written on the first attribution line.
    #[serde(default = "Preamble::default_url")]
    pub url: String,
    /// Copyright holder; the current year is prepended at render time.
    #[serde(default = "Preamble::default_copyright")]
    pub copyright: String,
    /// SPDX license identifier.
    #[serde(default = "Preamble::default_license")]
    pub license: String,
}

impl Preamble {
    fn default_url() -> String {
        "https://example.com/project".to_string()
    }

    fn default_copyright() -> String {
        "The project authors".to_string()
    }

    fn default_license() -> String {
        "MIT".to_string()
    }
}

impl Default for Preamble {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            copyright: Self::default_copyright(),
            license: Self::default_license(),
        }
    }
}

/// Raw configuration file schema. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Root directory of the header tree to scan.
    pub base: Option<PathBuf>,
    /// Directory the amalgamated header is written into.
    pub output: Option<PathBuf>,
    /// Base name of the emitted file.
    pub name: Option<String>,
    /// Remove comments from the emitted header.
    pub strip: Option<bool>,
    /// Additional include search directories, searched after the base
    /// directory and its `detail/` subdirectory.
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,
    /// Glob patterns for files to skip during entry discovery.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Attribution block overrides.
    pub preamble: Option<Preamble>,
}

/// Values supplied on the command line. Each one overrides the
/// corresponding configuration-file key.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    /// `--strip` can only turn stripping on; it cannot un-set a `strip:
    /// true` from the file.
    pub strip: bool,
    pub include_dirs: Vec<PathBuf>,
    pub exclude: Vec<String>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub strip: bool,
    pub include_dirs: Vec<PathBuf>,
    pub exclude: Vec<String>,
    pub preamble: Preamble,
}

impl Settings {
    /// Merge CLI overrides with a configuration file into the settings a
    /// run executes with. Precedence: CLI flag > file key > default.
    ///
    /// List-valued settings (`include_dirs`, `exclude`) are additive: the
    /// file's entries come first, then the CLI's.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Self {
        let mut include_dirs = file.include_dirs;
        include_dirs.extend(overrides.include_dirs);

        let mut exclude = file.exclude;
        exclude.extend(overrides.exclude);

        Self {
            base: overrides
                .base
                .or(file.base)
                .unwrap_or_else(defaults::default_base_dir),
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(defaults::default_output_dir),
            name: overrides
                .name
                .or(file.name)
                .unwrap_or_else(defaults::default_output_name),
            strip: overrides.strip || file.strip.unwrap_or(false),
            include_dirs,
            exclude,
            preamble: file.preamble.unwrap_or_default(),
        }
    }
}

/// Parses a YAML string into a `FileConfig`.
///
/// Unknown keys are a hard error; the message carries a hint listing the
/// accepted keys.
pub fn parse(yaml_content: &str) -> Result<FileConfig> {
    serde_yaml::from_str::<FileConfig>(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(
            "accepted keys: base, output, name, strip, include_dirs, exclude, preamble"
                .to_string(),
        ),
    })
}

/// Parse a `FileConfig` from a YAML file path.
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
