use bench_compare::cli::commands;
use bench_compare::cli::{Cli, USAGE};
use bench_compare::config;
use bench_compare::logging::init_logging;
use bench_compare::{CompareError, Result, StructuredError};
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, IsTerminal};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => handle_parse_error(&err),
    };

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {e}");
        // Don't exit, just continue without logging
    }

    if let Err(e) = run(&cli) {
        handle_error(&e);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let project_dir = std::env::current_dir().ok();
    let config = config::load_config(&cli.overrides(), project_dir.as_deref())?;
    commands::compare::execute(&cli.baseline_file, &cli.optimized_file, &config)
}

/// Help and version go through clap; anything else is a usage error.
fn handle_parse_error(err: &clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        _ => {
            eprint!("{}", err.render());
            handle_error(&CompareError::Usage {
                detail: err.kind().as_str().unwrap_or("invalid arguments").to_string(),
            })
        }
    }
}

/// Print the error and exit with its category's exit code.
///
/// Usage errors print the usage line on stdout; everything else is rendered
/// on stderr, colored when stderr is a terminal.
fn handle_error(err: &CompareError) -> ! {
    let structured = StructuredError::from_error(err);
    let exit_code = structured.code.exit_code();

    if matches!(err, CompareError::Usage { .. }) {
        println!("{USAGE}");
    } else {
        let use_color = io::stderr().is_terminal();
        eprintln!("{}", structured.to_human(use_color));
    }

    std::process::exit(exit_code);
}
