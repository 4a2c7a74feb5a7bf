//! Homebrew (`brew`), on macOS and Linux.

use crate::backend::classify::{Channel, Classify, Inspection, Markers};
use crate::backend::{Backend, clean_after_install};
use crate::dispatch::Op;
use crate::error::Result;
use crate::exec::{Cmd, Confirm, Engine};

/// Phrases `brew info` prints for a name that only exists as a cask.
pub const MARKERS: Markers = Markers {
    missing_primary: "No available formula with the name",
    found_secondary: "Found a cask named",
};

/// The Homebrew backend.
#[derive(Debug, Clone)]
pub struct Homebrew {
    /// Command engine.
    engine: Engine,
}

impl Homebrew {
    /// Wrap an engine.
    #[must_use]
    pub const fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Run a read-only `brew` subcommand with keywords appended.
    fn plain(&self, words: &[&str], kws: &[String]) -> Result<()> {
        self.engine.run_or_print(&Cmd::new("brew", words).kws(kws))
    }

    /// Run a mutating `brew` subcommand that asks first.
    fn asking(&self, words: &[&str], kws: &[String]) -> Result<()> {
        self.engine
            .run_or_print(&Cmd::new("brew", words).kws(kws).confirm(Confirm::Ask))
    }

    /// What: Install, reinstall, or uninstall each keyword in the channel `brew info` reports.
    ///
    /// Inputs:
    /// - `verb`: `install`, `reinstall`, or `uninstall`.
    /// - `kws`: Package names, handled one by one.
    ///
    /// Output:
    /// - `Ok(())` once every keyword was handled.
    ///
    /// # Errors
    /// - The first classification or execution error; later keywords are skipped.
    ///
    /// Details:
    /// - Casks get `--cask`; formulae and unknown names go through plain `brew <verb>`.
    /// - `force_cask` skips the inspection and treats every keyword as a cask.
    /// - Without keywords `brew <verb>` runs bare so brew reports the missing argument.
    fn per_channel(&self, verb: &str, kws: &[String]) -> Result<()> {
        if kws.is_empty() {
            return self.asking(&[verb], kws);
        }
        let force_cask = self.engine.mode().force_cask;
        let inspect = Inspection::new(&self.engine, Cmd::new("brew", &["info"]), MARKERS);
        for pkg in kws {
            let channel = if force_cask {
                Channel::Secondary
            } else {
                inspect.classify(pkg)?
            };
            let words = match channel {
                Channel::Secondary => vec![verb, "--cask"],
                Channel::Primary | Channel::Unavailable => vec![verb],
            };
            self.asking(&words, std::slice::from_ref(pkg))?;
        }
        Ok(())
    }
}

impl Backend for Homebrew {
    fn name(&self) -> &'static str {
        "brew"
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    /// With keywords this is a search of installed packages.
    fn q(&self, kws: &[String]) -> Result<()> {
        if kws.is_empty() {
            self.plain(&["list"], kws)
        } else {
            self.qs(kws)
        }
    }

    fn qc(&self, kws: &[String]) -> Result<()> {
        self.plain(&["log"], kws)
    }

    fn qe(&self, kws: &[String]) -> Result<()> {
        self.plain(&["leaves"], kws)
    }

    fn qi(&self, kws: &[String]) -> Result<()> {
        self.si(kws)
    }

    fn ql(&self, kws: &[String]) -> Result<()> {
        self.plain(&["list"], kws)
    }

    fn qs(&self, kws: &[String]) -> Result<()> {
        let listing = Cmd::new("brew", &["list", "--versions"]);
        super::search_listing(&self.engine, &listing, kws)
    }

    fn qu(&self, kws: &[String]) -> Result<()> {
        self.plain(&["outdated"], kws)
    }

    fn r(&self, kws: &[String]) -> Result<()> {
        self.per_channel("uninstall", kws)
    }

    fn rs(&self, kws: &[String]) -> Result<()> {
        self.r(kws)?;
        self.asking(&["autoremove"], &[])
    }

    /// `reinstall` installs missing packages too; `--needed` keeps present ones as they are.
    fn s(&self, kws: &[String]) -> Result<()> {
        let verb = if self.engine.mode().needed {
            "install"
        } else {
            "reinstall"
        };
        self.per_channel(verb, kws)?;
        clean_after_install(self, Op::Scc)
    }

    fn sc(&self, kws: &[String]) -> Result<()> {
        self.asking(&["cleanup"], kws)
    }

    fn scc(&self, kws: &[String]) -> Result<()> {
        self.asking(&["cleanup", "-s"], kws)
    }

    fn si(&self, kws: &[String]) -> Result<()> {
        if self.engine.mode().force_cask {
            self.plain(&["info", "--cask"], kws)
        } else {
            self.plain(&["info"], kws)
        }
    }

    fn sii(&self, kws: &[String]) -> Result<()> {
        self.plain(&["uses", "--installed"], kws)
    }

    fn ss(&self, kws: &[String]) -> Result<()> {
        self.plain(&["search"], kws)
    }

    /// Plain `brew upgrade` covers casks as well; `--cask` limits it to them.
    fn su(&self, kws: &[String]) -> Result<()> {
        if self.engine.mode().force_cask {
            self.asking(&["upgrade", "--cask"], kws)
        } else {
            self.asking(&["upgrade"], kws)
        }
    }

    fn sy(&self, kws: &[String]) -> Result<()> {
        self.plain(&["update"], kws)
    }
}
