//! Line parser for the tree notation.
//!
//! Every source line is turned into a flat run of [`Entry`] values: the
//! directories named by its `/`-separated prefix, followed by the file it
//! ends with (if any). Brace groups such as `src/{main.rs,lib.rs}` are
//! expanded into one synthetic line per item, recursively.

use log::trace;

use crate::constants::COMMENT_MARKER;
use crate::entry::{Directory, Entry, File};
use crate::error::{Error, Result};

/// Parses one raw source line.
///
/// # Arguments
/// * `text` - The raw line, indentation included
/// * `indent_unit` - Number of whitespace characters per level
/// * `line` - 1-based source line number, attached to every entry
///
/// # Returns
/// * `Result<Vec<Entry>>` - Entries in declaration order; empty for blank and
///   comment-only lines
///
/// # Errors
/// * `Error::MalformedIndentation` if the indentation is not a multiple of `indent_unit`
/// * `Error::UnterminatedExpansion` / `Error::MissingExpansionOpen` for broken brace groups
pub fn parse_line(text: &str, indent_unit: usize, line: usize) -> Result<Vec<Entry>> {
    let text = text.trim_end();
    let content = text.trim_start();
    if content.is_empty() || content.starts_with(COMMENT_MARKER) {
        return Ok(Vec::new());
    }

    let columns = text.chars().take_while(|c| c.is_whitespace()).count();
    if indent_unit == 0 || columns % indent_unit != 0 {
        return Err(Error::MalformedIndentation { line, columns });
    }
    let level = columns / indent_unit;

    let content = match content.find(COMMENT_MARKER) {
        Some(pos) => content[..pos].trim_end(),
        None => content,
    };

    let entries = parse_path(content, level, line)?;
    trace!("line {} (level {}): {:?}", line, level, entries);
    Ok(entries)
}

/// Parses every line of a document, numbering lines from 1.
///
/// Stops at the first error; entries of earlier lines are discarded with it.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], indent_unit: usize) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (index, text) in lines.iter().enumerate() {
        entries.extend(parse_line(text.as_ref(), indent_unit, index + 1)?);
    }
    Ok(entries)
}

/// Parses a comment-free, unindented path starting at `level`.
fn parse_path(text: &str, mut level: usize, line: usize) -> Result<Vec<Entry>> {
    let (prefix, body) = split_expansion(text, line)?;

    let mut segments: Vec<&str> = prefix.split('/').collect();
    let leaf = segments.pop().unwrap_or_default();

    let mut entries = Vec::new();
    for segment in segments {
        let segment = segment.trim();
        // `a//b` does not open an extra level
        if segment.is_empty() {
            continue;
        }
        entries.push(Entry::Directory(Directory::new(segment, level, line)));
        level += 1;
    }

    if let Some(body) = body {
        for item in split_items(body, line)? {
            entries.extend(parse_path(&format!("{}{}", leaf, item), level, line)?);
        }
        return Ok(entries);
    }

    let leaf = leaf.trim();
    if !leaf.is_empty() {
        entries.push(Entry::File(File::new(leaf, level, line)));
    }

    Ok(entries)
}

/// Splits `prefix{body}` into its prefix and the text between the outer braces.
fn split_expansion(text: &str, line: usize) -> Result<(&str, Option<&str>)> {
    if !text.contains(['{', '}']) {
        return Ok((text, None));
    }
    if !text.ends_with('}') {
        return Err(Error::UnterminatedExpansion { line });
    }

    let open = text.find('{').ok_or(Error::MissingExpansionOpen { line })?;
    let prefix = &text[..open];
    if prefix.contains('}') {
        return Err(Error::MissingExpansionOpen { line });
    }

    Ok((prefix, Some(&text[open + 1..text.len() - 1])))
}

/// Splits an expansion body on its top-level commas.
///
/// Nested groups are kept whole, so `a/{x,y},b` gives `["a/{x,y}", "b"]`.
fn split_items(body: &str, line: usize) -> Result<Vec<String>> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in body.chars() {
        match c {
            '{' => {
                depth += 1;
                current.push(c);
            }
            '}' => {
                if depth == 0 {
                    return Err(Error::MissingExpansionOpen { line });
                }
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                items.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if depth > 0 {
        return Err(Error::UnterminatedExpansion { line });
    }
    items.push(current.trim().to_string());

    Ok(items)
}
