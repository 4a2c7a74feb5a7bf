//! Plain-text prompts printed in front of every command the engine handles.

/// Shown before a command that is about to run.
pub const RUNNING: &str = "Running";
/// Shown for a command that dry-run mode only prints.
pub const PENDING: &str = "Pending";
/// Shown when the user declines a confirmation.
pub const CANCELED: &str = "Canceled";
/// Shown for informational lines.
pub const INFO: &str = "Info";

/// What: Render a prompt followed by a backtick-quoted command.
///
/// Inputs:
/// - `prompt`: One of the prompt constants.
/// - `cmd`: The rendered command line.
///
/// Output:
/// - A line like `  Running `brew update``, with the prompt right-aligned.
#[must_use]
pub fn format_cmd(prompt: &str, cmd: &str) -> String {
    format!("{prompt:>9} `{cmd}`")
}

/// Render an informational message with the same alignment as commands.
#[must_use]
pub fn format_info(msg: &str) -> String {
    format!("{INFO:>9} {msg}")
}
