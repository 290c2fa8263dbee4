//! Configuration handling for mktree.
//! Settings come from an optional `mktree.json` / `mktree.yml` / `mktree.yaml`
//! file, overridden by command-line flags.

use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::constants::{CONFIG_FILES, DEFAULT_INDENT, DEFAULT_OUTPUT};
use crate::error::{Error, Result};

/// Contents of a configuration file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whitespace characters per indentation level
    #[serde(default)]
    pub indent: Option<usize>,

    /// Where the generated script is saved
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Finds the first existing configuration file in `dir`.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found file, `None` if there is none
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path).map_err(Error::IoError)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads the configuration for a run.
///
/// An explicit file must exist. Without one, `dir` is searched for the
/// default file names and a missing file means default settings.
pub fn get_config<P: AsRef<Path>>(explicit: Option<&Path>, dir: P) -> Result<Config> {
    let content = match explicit {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(path).map_err(|e| {
                Error::ConfigError(format!("cannot read {}: {}", path.display(), e))
            })?;
            Some(content)
        }
        None => load_config(dir, &CONFIG_FILES)?,
    };

    match content {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}

/// Effective settings of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub indent: usize,
    pub output: PathBuf,
    pub save: bool,
    pub print: bool,
}

impl Settings {
    /// Merges flags and file configuration: flag, then file, then built-in default.
    ///
    /// Giving `--output` implies `--save`.
    pub fn resolve(args: &Args, config: Config) -> Self {
        let save = args.save || args.output.is_some();
        let output = args
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Self {
            indent: args.indent.or(config.indent).unwrap_or(DEFAULT_INDENT),
            output,
            save,
            print: !args.quiet,
        }
    }
}
