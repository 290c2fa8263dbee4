//! Error handling for mktree.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

use crate::entry::EntryKind;

/// Errors that can occur while reading, parsing or generating a tree.
///
/// Every parse error is fatal for the whole run: a bad line breaks the
/// level tracking of everything after it, so nothing is recovered.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents invalid settings coming from the CLI or a config file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Leading whitespace is not a multiple of the indent unit
    #[error("Wrong indentation at line {line} with value {columns}.")]
    MalformedIndentation { line: usize, columns: usize },

    /// An expansion group was opened but never closed at the end of the line
    #[error("Unterminated expansion at line {line}: the line must end with '}}'.")]
    UnterminatedExpansion { line: usize },

    /// A closing brace without its opening brace
    #[error("Missing '{{' for expansion at line {line}.")]
    MissingExpansionOpen { line: usize },

    /// Two siblings of the same kind share a name
    #[error(
        "The Directory {parent} at line {parent_line} has at least two {kind} entries with same name. \
         Name: {name}. First at line {first_line} and second one at line {second_line}."
    )]
    DuplicateName {
        kind: EntryKind,
        name: String,
        parent: String,
        parent_line: usize,
        first_line: usize,
        second_line: usize,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
