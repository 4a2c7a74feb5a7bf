//! Chocolatey (`choco`) on Windows.

use crate::backend::Backend;
use crate::error::Result;
use crate::exec::{Cmd, Confirm, Engine};

/// The Chocolatey backend.
#[derive(Debug, Clone)]
pub struct Chocolatey {
    /// Command engine.
    engine: Engine,
}

impl Chocolatey {
    /// Wrap an engine.
    #[must_use]
    pub const fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Read-only `choco` subcommand.
    fn query(&self, words: &[&str], kws: &[String]) -> Result<()> {
        self.engine.run_or_print(&Cmd::new("choco", words).kws(kws))
    }

    /// Mutating `choco` subcommand; `--yes` only in no-confirm mode.
    fn change(&self, words: &[&str], kws: &[String]) -> Result<()> {
        let cmd = Cmd::new("choco", words)
            .kws(kws)
            .confirm(Confirm::native(&["--yes"]));
        self.engine.run_or_print(&cmd)
    }
}

impl Backend for Chocolatey {
    fn name(&self) -> &'static str {
        "choco"
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn q(&self, kws: &[String]) -> Result<()> {
        self.query(&["list"], kws)
    }

    fn qi(&self, kws: &[String]) -> Result<()> {
        self.si(kws)
    }

    fn qu(&self, kws: &[String]) -> Result<()> {
        self.query(&["outdated"], kws)
    }

    fn r(&self, kws: &[String]) -> Result<()> {
        self.change(&["uninstall"], kws)
    }

    fn rs(&self, kws: &[String]) -> Result<()> {
        self.change(&["uninstall", "--removedependencies"], kws)
    }

    /// `--force` reinstalls packages that are already present, unless `--needed`.
    fn s(&self, kws: &[String]) -> Result<()> {
        if self.engine.mode().needed {
            self.change(&["install"], kws)
        } else {
            self.change(&["install", "--force"], kws)
        }
    }

    fn si(&self, kws: &[String]) -> Result<()> {
        self.query(&["info"], kws)
    }

    fn ss(&self, kws: &[String]) -> Result<()> {
        self.query(&["search"], kws)
    }

    /// `choco upgrade` needs an explicit `all` to upgrade everything.
    fn su(&self, kws: &[String]) -> Result<()> {
        if kws.is_empty() {
            self.change(&["upgrade", "all"], kws)
        } else {
            self.change(&["upgrade"], kws)
        }
    }

    /// Chocolatey has no separate refresh step.
    fn suy(&self, kws: &[String]) -> Result<()> {
        self.su(kws)
    }
}
