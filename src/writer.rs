//! Amalgamated output rendering.
//!
//! The writer consumes a [`ScanOutput`](crate::scanner::ScanOutput) and
//! produces the single output stream:
//!
//! 1.  **Preamble**: three attribution comment lines (project URL,
//!     copyright with the current year, SPDX license identifier).
//! 2.  **Format-off marker**: `// clang-format off`, so the generated file
//!     is not reflowed by downstream tooling.
//! 3.  **Once-only directive**: one `#pragma once` covering the whole
//!     output, replacing the per-file guards that are stripped below.
//! 4.  **System include block**: one `#include <...>` line per recorded
//!     system header, sorted lexicographically, deduplicated.
//! 5.  **File blocks**: each queued file in order, wrapped in
//!     `Begin File`/`End File` marker comments, with every include
//!     directive and `#pragma once` line removed and blank-line runs
//!     collapsed to a single blank line.
//! 6.  **Format-on marker**: `// clang-format on`.
//!
//! Rendering is separated from the disk write: the destination file is
//! created (and truncated) only after every source file has been read
//! successfully, so a failed run never leaves a partial output behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use regex::Regex;

use crate::config::Preamble;
use crate::defaults;
use crate::error::{Error, Result};
use crate::scanner::{ScanOutput, INCLUDE_PATTERN};

/// Matches a `#pragma once` guard line.
pub const PRAGMA_ONCE_PATTERN: &str = r"#pragma\s+once";

/// Renders and writes the amalgamated header.
pub struct Writer {
    preamble: Preamble,
    include_re: Regex,
    pragma_once_re: Regex,
}

impl Writer {
    pub fn new(preamble: Preamble) -> Result<Self> {
        Ok(Self {
            preamble,
            include_re: Regex::new(INCLUDE_PATTERN)?,
            pragma_once_re: Regex::new(PRAGMA_ONCE_PATTERN)?,
        })
    }

    /// Render the full output text. Reads every queued file; any read
    /// failure aborts rendering before a destination file exists.
    pub fn render(&self, scan: &ScanOutput) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("// {}\n", self.preamble.url));
        out.push_str(&format!(
            "// Copyright {}, {}\n",
            current_year(),
            self.preamble.copyright
        ));
        out.push_str(&format!(
            "// SPDX-License-Identifier: {}\n\n",
            self.preamble.license
        ));
        out.push_str("// clang-format off\n\n");
        out.push_str("#pragma once\n\n");

        if !scan.system_headers.is_empty() {
            for header in &scan.system_headers {
                out.push_str(&format!("#include <{}>\n", header));
            }
            out.push('\n');
        }

        for path in &scan.queue {
            self.render_file(&mut out, path)?;
        }

        out.push_str("// clang-format on\n");
        Ok(out)
    }

    /// Append one file block: begin marker, filtered body, end marker.
    fn render_file(&self, out: &mut String, path: &Path) -> Result<()> {
        info!("write file: {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        out.push_str(&format!("// Begin File: {}\n\n", path.display()));

        // The begin marker already supplied one blank line, so the body
        // starts in the "just wrote a blank" state: a leading blank run in
        // the body collapses into it.
        let mut last_line_blank = true;
        for line in text.lines() {
            if self.include_re.is_match(line) || self.pragma_once_re.is_match(line) {
                continue;
            }

            let blank = line.trim().is_empty();
            if !blank || !last_line_blank {
                out.push_str(line);
                out.push('\n');
            }
            last_line_blank = blank;
        }

        // Exactly one blank line before the end marker, whether or not the
        // body ended on one.
        if !last_line_blank {
            out.push('\n');
        }
        out.push_str(&format!("// End File: {}\n\n", path.display()));

        Ok(())
    }

    /// Write the rendered text to `<output_dir>/<name>.h`.
    ///
    /// The output directory must already exist; it is never created
    /// implicitly.
    pub fn write(&self, output_dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
        if !output_dir.is_dir() {
            return Err(Error::OutputDir {
                path: output_dir.to_path_buf(),
            });
        }

        let dest = output_dir.join(format!("{}.{}", name, defaults::OUTPUT_EXTENSION));
        info!("creating source amalgamation: {}", dest.display());

        fs::write(&dest, text).map_err(|source| Error::Write {
            path: dest.clone(),
            source,
        })?;

        Ok(dest)
    }
}

/// Current calendar year (UTC), for the copyright line.
fn current_year() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_of_unix_days((secs / 86_400) as i64)
}

/// Year of a civil date given as days since 1970-01-01 (days-to-civil
/// conversion, year part only).
fn year_of_unix_days(days: i64) -> i64 {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    if month <= 2 {
        y + 1
    } else {
        y
    }
}
