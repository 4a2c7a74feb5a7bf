//! Dry-run, confirmation, elevation, and capture rules applied to every `Cmd`.

use std::io;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::exec::cmd::{Cmd, Confirm};
use crate::exec::host::{Host, Outcome, SystemHost};
use crate::print;
use crate::request::ExecMode;

/// Runs commands for a backend. Cheap to clone; the host is shared.
#[derive(Clone)]
pub struct Engine {
    /// Execution-mode switches, fixed for the whole run.
    mode: ExecMode,
    /// Native flags given after `--`, added to every command.
    flags: Vec<String>,
    /// Where processes are started and lines are printed.
    host: Rc<dyn Host>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("mode", &self.mode)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Engine backed by real processes.
    #[must_use]
    pub fn system(mode: ExecMode) -> Self {
        Self::with_host(mode, Rc::new(SystemHost))
    }

    /// Engine backed by an arbitrary host.
    #[must_use]
    pub fn with_host(mode: ExecMode, host: Rc<dyn Host>) -> Self {
        Self {
            mode,
            flags: Vec::new(),
            host,
        }
    }

    /// Pass `flags` through to every native command, ahead of its keywords.
    #[must_use]
    pub fn with_flags(mut self, flags: &[String]) -> Self {
        self.flags = flags.to_vec();
        self
    }

    /// The execution-mode switches.
    #[must_use]
    pub const fn mode(&self) -> ExecMode {
        self.mode
    }

    /// Print a line through the host.
    pub fn echo(&self, line: &str) {
        self.host.echo(line);
    }

    /// What: The argv `cmd` is started with.
    ///
    /// Inputs:
    /// - `cmd`: The backend's command.
    ///
    /// Output:
    /// - `[sudo] words.. flags.. pass-through.. native-confirm.. kws..`
    ///
    /// Details:
    /// - `sudo` is only prefixed when the host is not already root.
    #[must_use]
    pub fn argv(&self, cmd: &Cmd) -> Vec<String> {
        let elevate = cmd.needs_sudo() && !self.host.is_root();
        cmd.clone()
            .flags(&self.flags)
            .argv(self.mode.no_confirm, elevate)
    }

    /// What: Execute `cmd` interactively, or only print it in dry-run mode.
    ///
    /// Inputs:
    /// - `cmd`: The command to run.
    ///
    /// Output:
    /// - `Ok(())` on success, in dry-run mode, and when the user declines.
    ///
    /// # Errors
    /// - [`Error::Spawn`] when the program cannot be started.
    /// - [`Error::ExecutionFailure`] on a non-zero exit, without captured text.
    ///
    /// Details:
    /// - Dry-run prints `Pending` and never touches the process layer.
    /// - `Confirm::Ask` asks first unless no-confirm is on; a "no" prints `Canceled`.
    pub fn run_or_print(&self, cmd: &Cmd) -> Result<()> {
        let argv = self.argv(cmd);
        let line = argv.join(" ");
        if self.mode.dry_run {
            self.echo(&print::format_cmd(print::PENDING, &line));
            return Ok(());
        }
        if matches!(cmd.confirm_style(), Confirm::Ask)
            && !self.mode.no_confirm
            && !self.host.confirm(&format!("Proceed with `{line}`?"))
        {
            tracing::warn!(command = %line, "declined by user");
            self.echo(&print::format_cmd(print::CANCELED, &line));
            return Ok(());
        }
        self.echo(&print::format_cmd(print::RUNNING, &line));
        tracing::debug!(command = %line, "spawning (inherited)");
        let outcome = self.host.run_inherited(&argv).map_err(|e| spawn_error(cmd, e))?;
        check(line, outcome, false).map(drop)
    }

    /// What: Execute `cmd` even in dry-run mode, echoing and collecting its output.
    ///
    /// Inputs:
    /// - `cmd`: An inspection command.
    ///
    /// Output:
    /// - The combined stdout and stderr text.
    ///
    /// # Errors
    /// - [`Error::Spawn`] when the program cannot be started.
    /// - [`Error::ExecutionFailure`] on a non-zero exit, carrying the text with `echoed = true`.
    pub fn run_captured(&self, cmd: &Cmd) -> Result<String> {
        let argv = self.argv(cmd);
        let line = argv.join(" ");
        self.echo(&print::format_cmd(print::RUNNING, &line));
        tracing::debug!(command = %line, "spawning (teed)");
        let outcome = self.host.run_teed(&argv).map_err(|e| spawn_error(cmd, e))?;
        check(line, outcome, true)
    }

    /// What: Execute `cmd` silently and return its combined output.
    ///
    /// Inputs:
    /// - `cmd`: A listing command whose output is filtered before display.
    ///
    /// Output:
    /// - The combined stdout and stderr text.
    ///
    /// # Errors
    /// - [`Error::Spawn`] when the program cannot be started.
    /// - [`Error::ExecutionFailure`] on a non-zero exit, carrying the text with `echoed = false`.
    pub fn run_muted(&self, cmd: &Cmd) -> Result<String> {
        let argv = self.argv(cmd);
        let line = argv.join(" ");
        tracing::debug!(command = %line, "spawning (muted)");
        let outcome = self.host.run_muted(&argv).map_err(|e| spawn_error(cmd, e))?;
        check(line, outcome, false)
    }
}

/// Wrap a launch failure with the program name.
fn spawn_error(cmd: &Cmd, source: io::Error) -> Error {
    tracing::error!(program = cmd.program(), error = %source, "failed to start");
    Error::Spawn {
        program: cmd.program().to_string(),
        source,
    }
}

/// What: Turn a finished child into a result.
///
/// Inputs:
/// - `command`: Rendered command line.
/// - `outcome`: Exit code and collected output.
/// - `echoed`: Whether the output already reached the terminal.
///
/// Output:
/// - The output on success, `ExecutionFailure` otherwise.
///
/// Details:
/// - Inherited runs collect nothing, so their failures carry no text.
fn check(command: String, outcome: Outcome, echoed: bool) -> Result<String> {
    if outcome.success() {
        return Ok(outcome.output);
    }
    tracing::error!(command = %command, code = ?outcome.code, "command failed");
    let output = (!outcome.output.is_empty()).then_some(outcome.output);
    Err(Error::ExecutionFailure {
        command,
        code: outcome.code,
        output,
        echoed,
    })
}
