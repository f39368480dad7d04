//! padsplits CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the pipeline, and map
//! any failure to a single `error: ...` line on stderr with exit status 2.
//! For programmatic use, prefer the library API (`padsplits::api`).

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

mod cli;

const FAILURE: u8 = 2;

fn main() -> ExitCode {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => {
            // Usage errors and --help both go to stderr and exit 2
            eprint!("{}", e);
            return ExitCode::from(FAILURE);
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(FAILURE)
        }
    }
}
