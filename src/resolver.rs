//! Include path resolution.
//!
//! An [`IncludeDirs`] is the ordered list of directories a quoted include
//! name is resolved against. Search priority is insertion order: the first
//! directory in which the candidate relative path exists wins. Directories
//! are registered once at startup (the base directory, then its `detail/`
//! subdirectory, then any extra user-supplied directories) and the set is
//! append-only afterwards.
//!
//! Resolution is deliberately best-effort: a name that does not exist under
//! any search directory is not an error, it just means the include refers
//! to something outside the tree being amalgamated.

use std::path::{Component, Path, PathBuf};

use log::{debug, info};

/// Ordered set of include search directories.
#[derive(Debug, Clone, Default)]
pub struct IncludeDirs {
    dirs: Vec<PathBuf>,
}

impl IncludeDirs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a search directory.
    ///
    /// Returns false (and registers nothing) when the directory does not
    /// exist on disk.
    pub fn add(&mut self, dir: impl Into<PathBuf>) -> bool {
        let dir = dir.into();
        if !dir.exists() {
            debug!("include directory skipped (missing): {}", dir.display());
            return false;
        }

        info!("include directory added: {}", dir.display());
        self.dirs.push(dir);
        true
    }

    /// The registered directories, in search order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Map a quoted include name to a filesystem path.
    ///
    /// Absolute names are returned unchanged without a directory search.
    /// Otherwise the name is joined to each registered directory in order
    /// and the first candidate that exists is returned, lexically
    /// normalized. `None` means the include is external.
    pub fn resolve(&self, include: &str) -> Option<PathBuf> {
        let include_path = Path::new(include);
        if include_path.is_absolute() {
            return Some(include_path.to_path_buf());
        }

        for dir in &self.dirs {
            let candidate = normalize(&dir.join(include_path));
            if candidate.exists() {
                debug!("resolved \"{}\" -> {}", include, candidate.display());
                return Some(candidate);
            }
        }

        None
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component where possible.
///
/// Purely textual: the filesystem is never consulted and symlinks are not
/// resolved. Used to keep visited-set keys canonical so the same file
/// reached through different include spellings is recognized as one path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // "/.." is still "/"
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(name) => out.push(name),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }

    out
}
