//! pacmux binary entrypoint kept minimal. The dispatch engine lives in the library.

use std::process::ExitCode;

use clap::Parser;

use pacmux::args::{Args, choose_backend, determine_log_level};
use pacmux::config::Config;
use pacmux::exec::Engine;
use pacmux::{Error, Result, dispatch};

/// What: Parse, configure, select a backend, and dispatch.
///
/// Inputs:
/// - `args`: Parsed command line.
///
/// Output:
/// - `Ok(())` when every native command succeeded.
///
/// # Errors
/// - Any config, request, selection, or execution error.
fn run(args: &Args) -> Result<()> {
    let config = Config::load()?;
    let request = args.to_request(&config)?;
    let kind = choose_backend(args, &config)?;
    let engine = Engine::system(request.mode()).with_flags(request.flags());
    let backend = kind.build(engine);
    dispatch(&request, backend.as_ref())
}

/// Print an error the way users expect, including native text they have not seen.
fn report(err: &Error) {
    tracing::error!(error = %err, "pacmux failed");
    if let Some(text) = err.unshown_output() {
        eprint!("{text}");
        if !text.ends_with('\n') {
            eprintln!();
        }
    }
    eprintln!("error: {err}");
}

fn main() -> ExitCode {
    let args = Args::parse();
    pacmux::logging::init(&determine_log_level(&args));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pacmux starting");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
