//! mktree's main application entry point.
//! Parses the command line, runs the pipeline and hands the script to the
//! console and/or the output file.

use mktree::{
    cli::{get_args, Args},
    config::{get_config, Settings},
    error::{default_error_handler, Result},
    logger::init_logger,
    output::write_script,
    processor::MkTree,
    source::InputSource,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration file and merges it with the flags
/// 2. Reads the tree notation
/// 3. Generates the script
/// 4. Prints it unless `--quiet`, saves it when requested
fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = get_config(args.config.as_deref(), &current_dir)?;
    let settings = Settings::resolve(&args, config);
    log::debug!("Settings: {:?}", settings);

    let source = InputSource::from_args(args.input, args.text)?;
    let lines = source.read_lines()?;

    let script = MkTree::new(settings.indent)?.render(&lines)?;

    if settings.print {
        print!("{}", script);
    }
    if settings.save {
        write_script(&settings.output, &script)?;
        log::info!("Script saved to {}", settings.output.display());
    }

    Ok(())
}
