//! Common constants used throughout mktree.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["mktree.json", "mktree.yml", "mktree.yaml"];

/// Number of whitespace characters making up one indentation level
pub const DEFAULT_INDENT: usize = 4;

/// Script written when `--save` is given without an output path
pub const DEFAULT_OUTPUT: &str = "mktree.sh";

/// Starts a comment, either a whole line or the tail of an entry
pub const COMMENT_MARKER: &str = "--";

/// Name reported for the implicit top-level directory
pub const ROOT_NAME: &str = "root";
