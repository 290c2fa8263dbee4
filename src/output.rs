use log::debug;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Writes the generated script to `path`, creating missing parent directories.
pub fn write_script<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let base_path = std::env::current_dir().unwrap_or_default();
    let path = path.as_ref();
    let abs_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_path.join(path)
    };

    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing script to {}", abs_path.display());
    fs::write(abs_path, content).map_err(Error::IoError)
}
