//! Assembles the flat entry list into a directory tree.
//!
//! An entry belongs to the innermost open directory whose children start at
//! or above its level. Open directories are kept on an explicit stack, so
//! deep inputs do not grow the call stack.

use log::debug;

use crate::entry::{Directory, Entry, EntryKind};
use crate::error::{Error, Result};

/// Builds the tree rooted at the implicit root directory.
///
/// # Arguments
/// * `entries` - Flat entries in source order, as returned by the line parser
///
/// # Returns
/// * `Result<Directory>` - The root, with every entry nested under its parent
///
/// # Errors
/// * `Error::DuplicateName` if two directories, or two files, share a name
///   inside the same parent
pub fn build(entries: Vec<Entry>) -> Result<Directory> {
    // Each open directory paired with the minimum level of its children.
    let mut stack: Vec<(Directory, usize)> = vec![(Directory::root(), 0)];

    for entry in entries {
        while stack.len() > 1 && stack.last().is_some_and(|(_, min)| entry.level() < *min) {
            close_directory(&mut stack);
        }

        let Some((parent, _)) = stack.last_mut() else {
            break;
        };
        match entry {
            Entry::Directory(dir) => {
                if let Some(first) = parent.directories.iter().find(|d| d.name == dir.name) {
                    return Err(duplicate(EntryKind::Directory, parent, first.line, &dir.name, dir.line));
                }
                let min = dir.level + 1;
                stack.push((dir, min));
            }
            Entry::File(file) => {
                if let Some(first) = parent.files.iter().find(|f| f.name == file.name) {
                    return Err(duplicate(EntryKind::File, parent, first.line, &file.name, file.line));
                }
                parent.files.push(file);
            }
        }
    }

    while stack.len() > 1 {
        close_directory(&mut stack);
    }

    let root = stack.pop().map(|(root, _)| root).unwrap_or_else(Directory::root);
    debug!(
        "Built tree with {} top-level directories and {} top-level files",
        root.directories.len(),
        root.files.len()
    );
    Ok(root)
}

/// Pops the innermost open directory and attaches it to its parent.
fn close_directory(stack: &mut Vec<(Directory, usize)>) {
    if let Some((dir, _)) = stack.pop() {
        if let Some((parent, _)) = stack.last_mut() {
            parent.directories.push(dir);
        }
    }
}

fn duplicate(
    kind: EntryKind,
    parent: &Directory,
    first_line: usize,
    name: &str,
    second_line: usize,
) -> Error {
    Error::DuplicateName {
        kind,
        name: name.to_string(),
        parent: parent.name.clone(),
        parent_line: parent.line,
        first_line,
        second_line,
    }
}
