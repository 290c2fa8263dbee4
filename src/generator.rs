//! Shell script generation from a finished tree.
//!
//! `mkdir -p` creates every missing parent, so a directory with a single
//! child directory never needs its own command: whichever descendant emits
//! one first creates the whole chain. Siblings are created together with
//! one brace-consolidated command.

use log::debug;

use crate::entry::Directory;

/// Generates the full script for a tree.
///
/// The root itself is never created. Output is newline-terminated commands,
/// ordered so that every directory exists before anything is created inside it.
pub fn generate(root: &Directory) -> String {
    let mut script = String::new();
    generate_dir(root, "", true, &mut script);
    debug!("Generated {} commands", script.lines().count());
    script
}

/// Emits the commands for `dir`, located at `path` (`""` or ending in `/`).
///
/// `materialized` is true when an ancestor's command already creates `dir`.
fn generate_dir(dir: &Directory, path: &str, materialized: bool, script: &mut String) {
    match dir.directories.as_slice() {
        [] => {
            if !materialized {
                script.push_str(&command_line("mkdir -p", path.trim_end_matches('/'), &[]));
            }
        }
        [only] => {
            generate_dir(only, &format!("{}{}", path, only.name), false, script);
        }
        children => {
            let names: Vec<&str> = children.iter().map(Directory::bare_name).collect();
            script.push_str(&command_line("mkdir -p", path, &names));
            for child in children {
                generate_dir(child, &format!("{}{}", path, child.name), true, script);
            }
        }
    }

    if !dir.files.is_empty() {
        let names: Vec<&str> = dir.files.iter().map(|file| file.name.as_str()).collect();
        script.push_str(&command_line("touch", path, &names));
    }
}

/// Renders one command line.
///
/// Names are appended to `path`; more than one name is wrapped in a
/// `{a,b}` group. With no names the path alone is the argument.
pub fn command_line(cmd: &str, path: &str, names: &[&str]) -> String {
    match names {
        [] => format!("{} {}\n", cmd, path),
        [name] => format!("{} {}{}\n", cmd, path, name),
        _ => format!("{} {}{{{}}}\n", cmd, path, names.join(",")),
    }
}
