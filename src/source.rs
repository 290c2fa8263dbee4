use log::debug;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where the tree notation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Inline(String),
}

impl InputSource {
    /// Picks the source from the `--input` / `--text` pair; exactly one must be set.
    pub fn from_args(input: Option<PathBuf>, text: Option<String>) -> Result<Self> {
        match (input, text) {
            (Some(path), None) => Ok(Self::File(path)),
            (None, Some(text)) => Ok(Self::Inline(text)),
            (Some(_), Some(_)) => Err(Error::ConfigError(
                "--input and --text cannot be used together".to_string(),
            )),
            (None, None) => Err(Error::ConfigError(
                "either --input or --text must be given".to_string(),
            )),
        }
    }

    /// Returns the raw lines of the notation.
    ///
    /// Inline text is split on newlines and on the literal `\n` escape, so
    /// a single shell argument can carry a whole tree.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let content = match self {
            Self::File(path) => {
                debug!("Reading tree from {}", path.display());
                std::fs::read_to_string(path).map_err(Error::IoError)?
            }
            Self::Inline(text) => text.replace("\\n", "\n"),
        };
        Ok(content.lines().map(String::from).collect())
    }
}
