//! Entries produced by the line parser and assembled into a tree.

use std::fmt;

use crate::constants::ROOT_NAME;

/// Namespace an entry lives in. Directories and files never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// A directory. `name` always carries its trailing `/`.
///
/// Directories coming out of the parser have no children yet; the tree
/// builder fills `directories` and `files` in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub name: String,
    pub level: usize,
    pub line: usize,
    pub directories: Vec<Directory>,
    pub files: Vec<File>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub level: usize,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory(Directory),
    File(File),
}

impl Directory {
    /// Creates an empty directory, appending the `/` marker when missing.
    pub fn new(name: &str, level: usize, line: usize) -> Self {
        let name = if name.ends_with('/') {
            name.to_string()
        } else {
            format!("{}/", name)
        };
        Self {
            name,
            level,
            line,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// The implicit directory every tree hangs from. It is never emitted.
    pub fn root() -> Self {
        Self::new(ROOT_NAME, 0, 1)
    }

    /// Name without the trailing `/`, as used inside generated commands.
    pub fn bare_name(&self) -> &str {
        self.name.strip_suffix('/').unwrap_or(&self.name)
    }
}

impl File {
    pub fn new(name: &str, level: usize, line: usize) -> Self {
        Self { name: name.to_string(), level, line }
    }
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Directory(dir) => &dir.name,
            Entry::File(file) => &file.name,
        }
    }

    pub fn level(&self) -> usize {
        match self {
            Entry::Directory(dir) => dir.level,
            Entry::File(file) => file.level,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Entry::Directory(dir) => dir.line,
            Entry::File(file) => file.line,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Directory(_) => EntryKind::Directory,
            Entry::File(_) => EntryKind::File,
        }
    }
}
