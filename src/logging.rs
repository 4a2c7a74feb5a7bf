//! Tracing setup: a non-blocking file writer under the logs directory, with
//! stderr as the fallback.

use std::fmt;
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Log file name inside [`crate::paths::logs_dir`].
pub const LOG_FILE: &str = "pacmux.log";

/// Local-time timestamps shaped like `2025-01-31-T 14:05:09`.
pub struct PacmuxTimer;

impl FormatTime for PacmuxTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.format("%Y-%m-%d-T %H:%M:%S"))
    }
}

/// Keeps the background writer alive for the whole process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the filter, letting `RUST_LOG` win over the requested level.
fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter directive such as `info`.
///
/// Output:
/// - None; events go to `<logs_dir>/pacmux.log`, or to stderr if that cannot be opened.
///
/// Details:
/// - Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(level: &str) {
    let opened = crate::paths::logs_dir().and_then(|dir| {
        let path = dir.join(LOG_FILE);
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map(|file| (path, file))
    });
    match opened {
        Ok((path, file)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PacmuxTimer)
                .try_init()
                .is_ok();
            if installed {
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %path.display(), "logging initialized");
            }
        }
        Err(e) => {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_timer(PacmuxTimer)
                .try_init()
                .is_ok();
            if installed {
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }
}
