//! Command-line interface implementation for mktree.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for mktree.
#[derive(Parser, Debug)]
#[command(author, version, about = "mktree: generate mkdir/touch commands from an indented tree", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
pub struct Args {
    /// File containing the directory tree
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory tree given inline; lines are separated by newlines or `\n`
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Where to save the generated script (implies --save)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory/file indent size
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Save the generated script to disk
    #[arg(short, long)]
    pub save: bool,

    /// Do not print the generated script
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file (defaults to mktree.json, mktree.yml or mktree.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
