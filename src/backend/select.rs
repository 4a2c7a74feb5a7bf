//! Choosing a backend from the OS and the executables on `PATH`, or by name.

use std::fmt;
use std::str::FromStr;

use crate::backend::Backend;
use crate::backend::apt::Apt;
use crate::backend::chocolatey::Chocolatey;
use crate::backend::dnf::Dnf;
use crate::backend::homebrew::Homebrew;
use crate::backend::unknown::Unknown;
use crate::error::Error;
use crate::exec::Engine;

/// The package managers this crate can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// `brew`.
    Homebrew,
    /// `apt-get` and `dpkg`.
    Apt,
    /// `choco`.
    Chocolatey,
    /// `dnf` and `rpm`.
    Dnf,
    /// Nothing usable was found.
    Unknown,
}

impl BackendKind {
    /// What: Look a backend up by one of its names.
    ///
    /// Inputs:
    /// - `name`: e.g. `brew`, `apt-get`, `choco`; case-insensitive.
    ///
    /// Output:
    /// - `Some(kind)` for a known name, `None` otherwise.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "brew" | "homebrew" => Self::Homebrew,
            "apt" | "apt-get" | "dpkg" => Self::Apt,
            "choco" | "chocolatey" => Self::Chocolatey,
            "dnf" => Self::Dnf,
            "unknown" => Self::Unknown,
            _ => return None,
        };
        Some(kind)
    }

    /// What: Pick a backend from an OS name and an executable probe.
    ///
    /// Inputs:
    /// - `os`: Value shaped like [`std::env::consts::OS`].
    /// - `has_exe`: Whether a program is on `PATH`.
    ///
    /// Output:
    /// - The first match of the OS lookup table, else `Unknown`.
    ///
    /// Details:
    /// - windows: `choco`. macos: `brew`. linux: `apt-get`, `dnf`, `brew` in that order.
    #[must_use]
    pub fn detect_with(os: &str, has_exe: impl Fn(&str) -> bool) -> Self {
        let table: &[(&str, Self)] = match os {
            "windows" => &[("choco", Self::Chocolatey)],
            "macos" => &[("brew", Self::Homebrew)],
            "linux" => &[
                ("apt-get", Self::Apt),
                ("dnf", Self::Dnf),
                ("brew", Self::Homebrew),
            ],
            _ => &[],
        };
        table
            .iter()
            .find(|(exe, _)| has_exe(exe))
            .map_or(Self::Unknown, |&(_, kind)| kind)
    }

    /// Detect the backend for the running host.
    #[must_use]
    pub fn detect() -> Self {
        let kind = Self::detect_with(std::env::consts::OS, |exe| which::which(exe).is_ok());
        tracing::debug!(?kind, os = std::env::consts::OS, "detected package manager");
        kind
    }

    /// Instantiate the backend around `engine`.
    #[must_use]
    pub fn build(self, engine: Engine) -> Box<dyn Backend> {
        match self {
            Self::Homebrew => Box::new(Homebrew::new(engine)),
            Self::Apt => Box::new(Apt::new(engine)),
            Self::Chocolatey => Box::new(Chocolatey::new(engine)),
            Self::Dnf => Box::new(Dnf::new(engine)),
            Self::Unknown => Box::new(Unknown::new(engine)),
        }
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| Error::UnknownBackend(name.to_string()))
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Homebrew => "brew",
            Self::Apt => "apt",
            Self::Chocolatey => "choco",
            Self::Dnf => "dnf",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
