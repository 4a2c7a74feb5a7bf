//! The process and terminal boundary the engine talks to.

use std::io::{self, Read, Write};

/// Result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Exit code, `None` when the child was killed by a signal.
    pub code: Option<i32>,
    /// Combined stdout and stderr. Empty for inherited runs.
    pub output: String,
}

impl Outcome {
    /// Whether the child exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Everything the engine needs from the outside world.
///
/// `argv` is always non-empty; its first element is the program. Commands
/// are started directly, never through a shell.
pub trait Host {
    /// Print a line to the user.
    fn echo(&self, line: &str);

    /// Ask a yes/no question; `true` means proceed.
    fn confirm(&self, question: &str) -> bool;

    /// Whether the current process already runs as root.
    fn is_root(&self) -> bool;

    /// Run with inherited stdin, stdout, and stderr.
    ///
    /// # Errors
    /// - Returns `Err` when the program cannot be started.
    fn run_inherited(&self, argv: &[String]) -> io::Result<Outcome>;

    /// Run with stderr merged into stdout, streaming it to the terminal while
    /// also collecting it.
    ///
    /// # Errors
    /// - Returns `Err` when the program cannot be started or its output cannot be read.
    fn run_teed(&self, argv: &[String]) -> io::Result<Outcome>;

    /// Run with stderr merged into stdout, collecting it without printing.
    ///
    /// # Errors
    /// - Returns `Err` when the program cannot be started.
    fn run_muted(&self, argv: &[String]) -> io::Result<Outcome>;
}

/// The real host: child processes through `duct`, root detection through `nix`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

/// What: Turn an argument vector into a `duct` expression.
///
/// Inputs:
/// - `argv`: Program followed by its arguments.
///
/// Output:
/// - The expression, or `InvalidInput` when `argv` is empty.
///
/// # Errors
/// - Returns `Err` for an empty `argv`.
fn expression(argv: &[String]) -> io::Result<duct::Expression> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command line"))?;
    Ok(duct::cmd(program.as_str(), args).unchecked())
}

impl Host for SystemHost {
    fn echo(&self, line: &str) {
        println!("{line}");
    }

    /// Reads one line; anything but `n`/`no` counts as yes.
    fn confirm(&self, question: &str) -> bool {
        print!("{question} [Y/n]: ");
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_ok() {
            let trimmed = input.trim();
            !(trimmed.eq_ignore_ascii_case("n") || trimmed.eq_ignore_ascii_case("no"))
        } else {
            true
        }
    }

    #[cfg(unix)]
    fn is_root(&self) -> bool {
        nix::unistd::Uid::effective().is_root()
    }

    #[cfg(not(unix))]
    fn is_root(&self) -> bool {
        false
    }

    fn run_inherited(&self, argv: &[String]) -> io::Result<Outcome> {
        let out = expression(argv)?.run()?;
        Ok(Outcome {
            code: out.status.code(),
            output: String::new(),
        })
    }

    fn run_teed(&self, argv: &[String]) -> io::Result<Outcome> {
        let mut reader = expression(argv)?.stderr_to_stdout().reader()?;
        let mut collected = Vec::new();
        let mut chunk = [0_u8; 4096];
        let stdout = io::stdout();
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            let mut lock = stdout.lock();
            lock.write_all(&chunk[..n])?;
            lock.flush()?;
            collected.extend_from_slice(&chunk[..n]);
        }
        let code = reader.try_wait()?.and_then(|out| out.status.code());
        Ok(Outcome {
            code,
            output: String::from_utf8_lossy(&collected).into_owned(),
        })
    }

    fn run_muted(&self, argv: &[String]) -> io::Result<Outcome> {
        let out = expression(argv)?
            .stderr_to_stdout()
            .stdout_capture()
            .run()?;
        Ok(Outcome {
            code: out.status.code(),
            output: String::from_utf8_lossy(&out.stdout).into_owned(),
        })
    }
}
