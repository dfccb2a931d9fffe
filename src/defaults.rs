//! Default values for amalgamate configuration.
//!
//! This module provides centralized default values used across the CLI and
//! the configuration layer, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// File extensions recognized as C/C++ headers.
///
/// Only files carrying one of these extensions are ever parsed for include
/// directives; everything else is treated as external.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hxx", "hh", "inl"];

/// Extension of the emitted amalgamated file.
pub const OUTPUT_EXTENSION: &str = "h";

/// Conventional subdirectory of the base directory registered as a second
/// include search directory when it exists.
pub const DETAIL_SUBDIR: &str = "detail";

/// Name of the configuration file looked up in the working directory when
/// `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".amalgamate.yaml";

/// Returns the default base directory to scan.
///
/// This can be overridden by the `--base` CLI flag or the `base` key of the
/// configuration file.
pub fn default_base_dir() -> PathBuf {
    PathBuf::from("Source")
}

/// Returns the default output directory.
///
/// The directory must already exist; the tool never creates it. Can be
/// overridden by the `--output` CLI flag or the `output` configuration key.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from("Distribution")
}

/// Returns the default base name of the emitted file.
pub fn default_output_name() -> String {
    "amalgamated".to_string()
}

/// Returns true when `ext` (without the leading dot) is a recognized header
/// extension.
pub fn is_header_extension(ext: &str) -> bool {
    HEADER_EXTENSIONS.contains(&ext)
}
