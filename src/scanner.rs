//! Dependency scanning.
//!
//! The scanner expands a header tree's internal `#include` graph into a
//! dependency-ordered sequence of local files plus the set of system
//! headers they pull in.
//!
//! ## Process
//!
//! 1.  **Entry discovery**: every include search directory is walked
//!     recursively and all file paths are collected into one list, sorted
//!     lexicographically so that output ordering never depends on
//!     filesystem enumeration order.
//!
//! 2.  **Classification**: each candidate path is classified as exactly one
//!     of already-scanned, external (unrecognized extension or missing on
//!     disk), or eligible for parsing.
//!
//! 3.  **Traversal**: eligible files are walked depth-first with an
//!     explicit work stack. A file is marked visited *before* its own
//!     includes are processed, which bounds the walk on cyclic or diamond
//!     graphs, and is appended to the output queue only *after* all of its
//!     local includes have been fully processed. That post-order append is
//!     what makes the queue a topological order for acyclic graphs.
//!
//! Include directives are detected with a line-oriented pattern. This is a
//! heuristic, not a preprocessor: macros are not expanded, `#ifdef` blocks
//! are not evaluated, and line continuations are not handled. An include
//! inside a comment still counts.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::defaults;
use crate::error::{Error, Result};
use crate::resolver::{self, IncludeDirs};

/// Matches both `#include "name"` and `#include <name>`; the capture is the
/// include name. Names may contain word characters, dots, slashes and
/// backslashes.
pub const INCLUDE_PATTERN: &str = r#"#include\s*[<"]([\w./\\]*)[>"]"#;

/// Matches only the quoted form, distinguishing local from system includes
/// on the same line.
pub const LOCAL_INCLUDE_PATTERN: &str = r#"#include\s*"([\w./\\]*)""#;

/// How a candidate path relates to the scan in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Recognized header, present on disk, not seen before: it was parsed.
    Parsed,
    /// Unrecognized extension or missing on disk: treated as external,
    /// never parsed.
    External,
    /// Already visited earlier in this scan.
    AlreadyScanned,
}

/// Result of scanning a header tree.
#[derive(Debug, Default)]
pub struct ScanOutput {
    /// Local header files in dependency (post-)order, each exactly once.
    pub queue: Vec<PathBuf>,
    /// Names of angle-bracket includes, deduplicated and iterated sorted.
    pub system_headers: BTreeSet<String>,
}

/// Mutable traversal state, created per scan invocation and threaded
/// through the walk. Never shared between invocations, so concurrent scans
/// with separate scanners cannot observe each other.
#[derive(Debug, Default)]
struct ScanContext {
    /// Paths already scanned (successfully or found external). Membership
    /// is checked before any work; insertion happens the moment scanning
    /// begins for a path, which is what makes mutual includes terminate.
    visited: HashSet<PathBuf>,
    queue: Vec<PathBuf>,
    system_headers: BTreeSet<String>,
}

/// One file being expanded on the explicit work stack: its resolved local
/// includes and a cursor into them.
#[derive(Debug)]
struct Frame {
    path: PathBuf,
    pending: Vec<PathBuf>,
    next: usize,
}

/// Expands a header tree's include graph.
pub struct Scanner {
    include_dirs: IncludeDirs,
    exclude: Vec<glob::Pattern>,
    include_re: Regex,
    local_re: Regex,
}

impl Scanner {
    /// Create a scanner over the given search directories. `exclude`
    /// patterns filter entry discovery; they are matched against each
    /// file's path relative to the directory being walked.
    pub fn new(include_dirs: IncludeDirs, exclude: &[String]) -> Result<Self> {
        let exclude = exclude
            .iter()
            .map(|pattern| glob::Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            include_dirs,
            exclude,
            include_re: Regex::new(INCLUDE_PATTERN)?,
            local_re: Regex::new(LOCAL_INCLUDE_PATTERN)?,
        })
    }

    pub fn include_dirs(&self) -> &IncludeDirs {
        &self.include_dirs
    }

    /// Discover all entry files under the search directories and scan them.
    pub fn scan_tree(&self) -> Result<ScanOutput> {
        let entries = self.discover_entries()?;
        self.scan(&entries)
    }

    /// Scan the given entry paths in order.
    ///
    /// Non-header and already-seen entries are skipped without effect, so
    /// the list may freely contain duplicates and unrelated files.
    pub fn scan(&self, entries: &[PathBuf]) -> Result<ScanOutput> {
        let mut ctx = ScanContext::default();
        for entry in entries {
            self.scan_file(&mut ctx, entry)?;
        }

        Ok(ScanOutput {
            queue: ctx.queue,
            system_headers: ctx.system_headers,
        })
    }

    /// Walk every search directory, collect all file paths, and sort the
    /// combined list lexicographically. Without the sort, filesystem
    /// enumeration order would leak into the final output ordering.
    fn discover_entries(&self) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();

        for dir in self.include_dirs.dirs() {
            for entry in WalkDir::new(dir) {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.into_path();
                if self.is_excluded(dir, &path) {
                    debug!("entry excluded: {}", path.display());
                    continue;
                }
                entries.push(resolver::normalize(&path));
            }
        }

        entries.sort();
        Ok(entries)
    }

    fn is_excluded(&self, walk_root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(walk_root).unwrap_or(path);
        self.exclude
            .iter()
            .any(|pattern| pattern.matches_path(relative))
    }

    /// Expand one entry file and everything it transitively includes.
    ///
    /// Iterative depth-first walk over an explicit stack; recursion depth
    /// would otherwise equal include nesting depth, which is unbounded on
    /// pathological trees.
    fn scan_file(&self, ctx: &mut ScanContext, path: &Path) -> Result<Disposition> {
        let entry = resolver::normalize(path);
        let disposition = classify(ctx, &entry);
        if disposition != Disposition::Parsed {
            return Ok(disposition);
        }

        let pending = self.begin_parse(ctx, entry.clone())?;
        let mut stack = vec![Frame {
            path: entry,
            pending,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.pending.len() {
                // All local includes of this file are fully processed:
                // post-order append.
                debug!("enqueue header file: {}", frame.path.display());
                ctx.queue.push(frame.path.clone());
                stack.pop();
                continue;
            }

            let child = frame.pending[frame.next].clone();
            frame.next += 1;

            match classify(ctx, &child) {
                Disposition::Parsed => {
                    let pending = self.begin_parse(ctx, child.clone())?;
                    stack.push(Frame {
                        path: child,
                        pending,
                        next: 0,
                    });
                }
                Disposition::External => {
                    // Remember external resolutions so repeated references
                    // short-circuit on the visited check.
                    ctx.visited.insert(child);
                }
                Disposition::AlreadyScanned => {}
            }
        }

        Ok(Disposition::Parsed)
    }

    /// Mark `path` visited and parse its include directives. Returns the
    /// resolved local includes in source order; system headers are recorded
    /// into the context as a side effect.
    fn begin_parse(&self, ctx: &mut ScanContext, path: PathBuf) -> Result<Vec<PathBuf>> {
        info!("scan file: {}", path.display());
        ctx.visited.insert(path.clone());

        let text = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;

        let mut locals = Vec::new();
        for line in text.lines() {
            let Some(include) = self.include_re.captures(line) else {
                continue;
            };

            if let Some(local) = self.local_re.captures(line) {
                match self.include_dirs.resolve(&local[1]) {
                    Some(resolved) => locals.push(resolved),
                    // Best-effort policy: the line is dropped, the scan
                    // continues, the graph is unchanged.
                    None => warn!(
                        "unresolvable local include \"{}\" in {}",
                        &local[1],
                        path.display()
                    ),
                }
            } else {
                ctx.system_headers.insert(include[1].to_string());
            }
        }

        Ok(locals)
    }
}

/// Three-way classification of a candidate path. Pure check, no side
/// effects: the caller decides what to record.
fn classify(ctx: &ScanContext, path: &Path) -> Disposition {
    if ctx.visited.contains(path) {
        return Disposition::AlreadyScanned;
    }

    let recognized = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(defaults::is_header_extension);
    if !recognized || !path.exists() {
        return Disposition::External;
    }

    Disposition::Parsed
}
