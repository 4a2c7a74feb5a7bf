//! Error type shared by every layer of the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::dispatch::Op;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between parsing a request and the last
/// native command exiting.
#[derive(Error, Debug)]
pub enum Error {
    /// The selected backend has no translation for the operation.
    #[error("operation `{op}` is not supported by `{backend}`")]
    UnsupportedOperation {
        /// The resolved operation.
        op: Op,
        /// Name of the backend that rejected it.
        backend: &'static str,
    },

    /// A native command exited unsuccessfully.
    #[error("command `{command}` failed{}", exit_suffix(*.code))]
    ExecutionFailure {
        /// The command line as it was run.
        command: String,
        /// Exit code, `None` when the child was killed by a signal.
        code: Option<i32>,
        /// Combined stdout/stderr when the command was captured.
        output: Option<String>,
        /// Whether `output` already reached the terminal while running.
        echoed: bool,
    },

    /// The request violates the one-operation rule or names unknown modifiers.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An inspection command failed and its output matched no known marker.
    #[error("could not tell how to handle `{package}` from the output of `{command}`")]
    ClassificationAmbiguous {
        /// The package being classified.
        package: String,
        /// The inspection command.
        command: String,
        /// Raw inspection output.
        output: String,
    },

    /// The native program could not be started at all.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        /// Program name.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A search term is not a valid regular expression.
    #[error("search pattern `{pattern}` is ill-formed: {source}")]
    Pattern {
        /// The offending term.
        pattern: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The config file exists but could not be read.
    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::Config`].
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// `--using` or `default_pm` named a package manager we do not know.
    #[error("unknown package manager `{0}`")]
    UnknownBackend(String),
}

/// Render the trailing part of an `ExecutionFailure` message.
fn exit_suffix(code: Option<i32>) -> String {
    code.map_or_else(
        || " (terminated by signal)".to_string(),
        |c| format!(" with exit code {c}"),
    )
}

impl Error {
    /// Build an `UnsupportedOperation` for `op` on `backend`.
    #[must_use]
    pub const fn unsupported(op: Op, backend: &'static str) -> Self {
        Self::UnsupportedOperation { op, backend }
    }

    /// Whether this is a failed native command, including failed classification.
    #[must_use]
    pub const fn is_execution_failure(&self) -> bool {
        matches!(
            self,
            Self::ExecutionFailure { .. } | Self::ClassificationAmbiguous { .. }
        )
    }

    /// What: Native diagnostic text that has not been shown to the user yet.
    ///
    /// Inputs:
    /// - `self`: Any error.
    ///
    /// Output:
    /// - `Some(text)` for muted captures and failed classifications, `None` otherwise.
    ///
    /// Details:
    /// - Teed captures already streamed their text, so they return `None`.
    #[must_use]
    pub fn unshown_output(&self) -> Option<&str> {
        match self {
            Self::ExecutionFailure {
                output: Some(text),
                echoed: false,
                ..
            } => Some(text),
            Self::ClassificationAmbiguous { output, .. } => Some(output),
            _ => None,
        }
    }

    /// What: Map the error to a process exit code.
    ///
    /// Inputs:
    /// - `self`: The error that ended the run.
    ///
    /// Output:
    /// - The child's own code for execution failures when it is in `1..=255`, else `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ExecutionFailure { code: Some(c), .. } => {
                u8::try_from(*c).ok().filter(|&c| c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }
}
