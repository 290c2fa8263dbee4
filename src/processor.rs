//! Pipeline orchestration: line parser, tree builder, code generator.

use log::debug;

use crate::constants::DEFAULT_INDENT;
use crate::entry::{Directory, Entry};
use crate::error::{Error, Result};
use crate::{generator, parser, tree};

/// Turns tree notation into a shell script.
///
/// Each call works on fresh data; an instance only holds the indent unit.
#[derive(Debug, Clone, Copy)]
pub struct MkTree {
    indent: usize,
}

impl Default for MkTree {
    fn default() -> Self {
        Self { indent: DEFAULT_INDENT }
    }
}

impl MkTree {
    /// Creates a pipeline using `indent` whitespace characters per level.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `indent` is zero
    pub fn new(indent: usize) -> Result<Self> {
        if indent == 0 {
            return Err(Error::ConfigError("indent must be a positive number".to_string()));
        }
        Ok(Self { indent })
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Parses all lines into the flat entry list.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<Entry>> {
        let entries = parser::parse_lines(lines, self.indent)?;
        debug!("Parsed {} lines into {} entries", lines.len(), entries.len());
        Ok(entries)
    }

    /// Parses all lines and nests the result under the root directory.
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> Result<Directory> {
        tree::build(self.parse(lines)?)
    }

    /// Runs the whole pipeline and returns the generated script.
    ///
    /// Either the complete script is returned or an error; there is no
    /// partial output.
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> Result<String> {
        let root = self.build(lines)?;
        Ok(generator::generate(&root))
    }
}
