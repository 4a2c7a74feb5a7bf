//! Deciding which channel a package lives in by reading an inspection command's output.
//!
//! Some package managers keep two kinds of package behind one name (Homebrew
//! formulae and casks). The only reliable signal is the wording of the
//! inspection command, so that scraping lives here and nowhere else.

use crate::error::{Error, Result};
use crate::exec::{Cmd, Engine};

/// Where a package can be installed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Known nowhere; the native install command will report it.
    Unavailable,
    /// The regular channel (Homebrew formula).
    Primary,
    /// The alternate channel (Homebrew cask).
    Secondary,
}

/// Something that can place a package in a [`Channel`].
pub trait Classify {
    /// What: Classify one package.
    ///
    /// Inputs:
    /// - `package`: Package name.
    ///
    /// Output:
    /// - The package's channel.
    ///
    /// # Errors
    /// - `ClassificationAmbiguous` when the inspection failed with unknown output.
    /// - `Spawn` when the inspection command could not start.
    fn classify(&self, package: &str) -> Result<Channel>;
}

/// The two phrases an inspection output is scanned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Printed when the primary channel has no such package.
    pub missing_primary: &'static str,
    /// Printed when the secondary channel does have it.
    pub found_secondary: &'static str,
}

impl Markers {
    /// What: Read a channel out of inspection output.
    ///
    /// Inputs:
    /// - `text`: Raw output, possibly with ANSI colour codes.
    /// - `succeeded`: Whether the inspection exited with status zero.
    ///
    /// Output:
    /// - `Some(channel)` when the text or the exit status decides it, `None` otherwise.
    ///
    /// Details:
    /// - Both markers: Secondary. Only the missing marker: Unavailable.
    /// - No marker and a successful run: Primary.
    #[must_use]
    pub fn read(&self, text: &str, succeeded: bool) -> Option<Channel> {
        let clean = strip_ansi_escapes::strip_str(text);
        let missing = clean.contains(self.missing_primary);
        let secondary = clean.contains(self.found_secondary);
        match (missing, secondary) {
            (true, true) => Some(Channel::Secondary),
            (true, false) => Some(Channel::Unavailable),
            _ if succeeded => Some(Channel::Primary),
            _ => None,
        }
    }
}

/// Classifies by running an inspection command through the engine.
#[derive(Debug)]
pub struct Inspection<'e> {
    /// Engine used for the captured run.
    engine: &'e Engine,
    /// Inspection command without the package name.
    base: Cmd,
    /// Phrases to look for.
    markers: Markers,
}

impl<'e> Inspection<'e> {
    /// Build a classifier that runs `base <package>` and scans for `markers`.
    #[must_use]
    pub const fn new(engine: &'e Engine, base: Cmd, markers: Markers) -> Self {
        Self {
            engine,
            base,
            markers,
        }
    }
}

impl Classify for Inspection<'_> {
    fn classify(&self, package: &str) -> Result<Channel> {
        let cmd = self.base.clone().kws(&[package]);
        let (text, succeeded) = match self.engine.run_captured(&cmd) {
            Ok(text) => (text, true),
            Err(Error::ExecutionFailure { output, .. }) => (output.unwrap_or_default(), false),
            Err(e) => return Err(e),
        };
        let Some(channel) = self.markers.read(&text, succeeded) else {
            return Err(Error::ClassificationAmbiguous {
                package: package.to_string(),
                command: cmd.to_string(),
                output: text,
            });
        };
        tracing::debug!(package, ?channel, "classified");
        Ok(channel)
    }
}
