//! # CLI Command Implementations
//!
//! This module contains the implementation of the `amalgamate` command-line
//! surface. The tool has a single operation (build the amalgamated header),
//! so there is one command module.
//!
//! ## Structure
//!
//! The command module contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, resolves the
//!   configuration, and drives the scan/render/write pipeline from the
//!   `amalgamate` library.

pub mod build;
