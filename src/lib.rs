//! mktree turns an indentation-based description of a directory layout into
//! a shell script of `mkdir -p` and `touch` commands that recreates it.

/// Command-line interface module for the mktree application
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (mktree.json, mktree.yml, mktree.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Directory and file entries, flat and nested
pub mod entry;

/// Error types and handling for the mktree application
pub mod error;

/// Shell script generation from a finished tree
pub mod generator;

/// Logger initialisation for the binary
pub mod logger;

/// Writing the generated script to disk
pub mod output;

/// Line-by-line parsing of the tree notation, including brace expansion
pub mod parser;

/// Pipeline orchestration
pub mod processor;

/// Reading the tree notation from a file or inline text
pub mod source;

/// Nesting of parsed entries into a tree
pub mod tree;
