//! Shared utilities for argument processing.

use crate::args::Args;
use crate::backend::BackendKind;
use crate::config::Config;
use crate::error::Result;

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `PACMUX_TRACE=1` enables TRACE level for step-by-step command tracing.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    level_for(
        args.verbose,
        std::env::var("PACMUX_TRACE").ok().as_deref(),
        &args.log_level,
    )
}

/// Pure part of [`determine_log_level`].
fn level_for(verbose: bool, trace_env: Option<&str>, requested: &str) -> String {
    if verbose {
        "debug".to_string()
    } else if trace_env == Some("1") {
        "trace".to_string()
    } else {
        requested.to_string()
    }
}

/// What: Decide which backend to drive.
///
/// Inputs:
/// - `args`: Parsed arguments; `--using` wins.
/// - `config`: Loaded configuration; `default_pm` is next.
///
/// Output:
/// - The named backend, or the detected one when nothing is named.
///
/// # Errors
/// - `UnknownBackend` when a name is given but not recognised.
pub fn choose_backend(args: &Args, config: &Config) -> Result<BackendKind> {
    match args.using.as_deref().or(config.default_pm.as_deref()) {
        Some(name) => name.parse(),
        None => Ok(BackendKind::detect()),
    }
}
