//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `amalgamate` application. It uses the `thiserror` library to create an
//! `Error` enum that covers all anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! There are only two kinds of failure in this tool:
//!
//! - Non-fatal conditions (a local include that cannot be resolved, a line
//!   that does not match the include pattern) are absorbed at the call site
//!   and never surface as an `Error`.
//! - Everything else is fatal and aborts the run: unreadable source files,
//!   a missing output directory, an unparsable configuration file. There is
//!   no retry policy and no partial output: the destination file is only
//!   created once scanning and rendering have fully succeeded.
//!
//! The `Result<T>` alias is used throughout the library crate; the binary
//! layer converts into `anyhow::Result` at the boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for amalgamation operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file exists but could not be parsed.
    ///
    /// Includes the specific parsing issue and optionally a hint about how
    /// to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A source file could not be read during scanning or rendering.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The amalgamated output could not be written to disk.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output directory does not exist.
    ///
    /// The tool never creates directories implicitly, so this is fatal at
    /// write time.
    #[error("Output directory does not exist: {path}")]
    OutputDir { path: PathBuf },

    /// A directory walk failed while discovering entry files.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_parse() {
        let error = Error::ConfigParse {
            message: "Invalid YAML".to_string(),
            hint: None,
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("Invalid YAML"));
    }

    #[test]
    fn test_error_display_config_parse_with_hint() {
        let error = Error::ConfigParse {
            message: "Unknown key 'stripp'".to_string(),
            hint: Some("Did you mean 'strip'?".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("Unknown key 'stripp'"));
        assert!(display.contains("hint:"));
        assert!(display.contains("Did you mean 'strip'?"));
    }

    #[test]
    fn test_error_display_read() {
        let error = Error::Read {
            path: PathBuf::from("Source/Broken.h"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read"));
        assert!(display.contains("Source/Broken.h"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_error_display_write() {
        let error = Error::Write {
            path: PathBuf::from("Distribution/lib.h"),
            source: std::io::Error::other("disk full"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write"));
        assert!(display.contains("Distribution/lib.h"));
        assert!(display.contains("disk full"));
    }

    #[test]
    fn test_error_display_output_dir() {
        let error = Error::OutputDir {
            path: PathBuf::from("missing/dir"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Output directory does not exist"));
        assert!(display.contains("missing/dir"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_glob_error() {
        let glob_error = glob::Pattern::new("a[").unwrap_err();
        let error: Error = glob_error.into();
        let display = format!("{}", error);
        assert!(display.contains("Glob pattern error"));
    }

    #[test]
    fn test_error_from_regex_error() {
        let regex_error = regex::Regex::new("(unclosed").unwrap_err();
        let error: Error = regex_error.into();
        let display = format!("{}", error);
        assert!(display.contains("Regex error"));
    }
}
