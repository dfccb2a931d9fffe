//! # Amalgamate Library
//!
//! This library provides the core functionality for collapsing a
//! header-only C/C++ library into a single self-contained header file. It
//! is designed to be used by the `amalgamate` command-line tool but can
//! also be integrated into other applications that ship single-file
//! distributions of multi-file header trees.
//!
//! ## Quick Example
//!
//! ```
//! use amalgamate::stripper;
//!
//! // Comments go, literals stay
//! let stripped = stripper::strip("int x = 1; // answer").unwrap();
//! assert_eq!(stripped, "int x = 1;  ");
//!
//! let literal = stripper::strip("const char* s = \"// kept\";").unwrap();
//! assert_eq!(literal, "const char* s = \"// kept\";");
//! ```
//!
//! ## Core Concepts
//!
//! - **Include Resolution (`resolver`)**: Maps quoted include names to
//!   filesystem paths by searching an ordered list of include directories.
//! - **Dependency Scanning (`scanner`)**: Recursively expands the local
//!   include graph into a dependency-ordered file queue plus the set of
//!   system headers, with a mark-before-descend cycle guard.
//! - **Comment Stripping (`stripper`)**: A literal-aware text transform
//!   that removes `//` and `/* */` comments without touching string or
//!   character literal contents.
//! - **Output Rendering (`writer`)**: Emits the preamble, the sorted
//!   system-include block, and each file body (include lines and guards
//!   removed, blank runs collapsed) wrapped in begin/end markers.
//! - **Configuration (`config`)**: Resolves CLI flags, the optional
//!   `.amalgamate.yaml` file, and built-in defaults into one settings
//!   value.
//!
//! ## Execution Flow
//!
//! 1.  Register the include search directories (base, `detail/`, extras).
//! 2.  Discover entry files (walk, filter excludes, sort for determinism).
//! 3.  Scan the include graph into an ordered queue and system-header set.
//! 4.  Render the single output stream, optionally strip comments.
//! 5.  Write the result to the (pre-existing) output directory.
//!
//! Everything is single-threaded and synchronous; scan state lives in a
//! per-invocation context, so the library is re-entrant.

pub mod config;
pub mod defaults;
pub mod error;
pub mod output;
pub mod resolver;
pub mod scanner;
pub mod stripper;
pub mod writer;

#[cfg(test)]
mod stripper_proptest;
