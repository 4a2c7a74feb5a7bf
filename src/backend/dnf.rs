//! Fedora family: `dnf` for repositories, `rpm` for the local database.

use crate::backend::{Backend, clean_after_install};
use crate::dispatch::Op;
use crate::error::Result;
use crate::exec::{Cmd, Confirm, Engine};

/// The dnf backend.
#[derive(Debug, Clone)]
pub struct Dnf {
    /// Command engine.
    engine: Engine,
}

impl Dnf {
    /// Wrap an engine.
    #[must_use]
    pub const fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Query the local rpm database.
    fn rpm(&self, words: &[&str], kws: &[String]) -> Result<()> {
        self.engine.run_or_print(&Cmd::new("rpm", words).kws(kws))
    }

    /// Read-only `dnf` subcommand.
    fn query(&self, words: &[&str], kws: &[String]) -> Result<()> {
        self.engine.run_or_print(&Cmd::new("dnf", words).kws(kws))
    }

    /// Mutating `dnf` subcommand as root; `-y` only in no-confirm mode.
    fn change(&self, words: &[&str], kws: &[String]) -> Result<()> {
        let cmd = Cmd::sudo("dnf", words)
            .kws(kws)
            .confirm(Confirm::native(&["-y"]));
        self.engine.run_or_print(&cmd)
    }
}

impl Backend for Dnf {
    fn name(&self) -> &'static str {
        "dnf"
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn q(&self, kws: &[String]) -> Result<()> {
        self.rpm(&["-qa"], kws)
    }

    fn qc(&self, kws: &[String]) -> Result<()> {
        self.rpm(&["-q", "--changelog"], kws)
    }

    fn qe(&self, kws: &[String]) -> Result<()> {
        self.query(&["repoquery", "--userinstalled"], kws)
    }

    fn qi(&self, kws: &[String]) -> Result<()> {
        self.query(&["info", "--installed"], kws)
    }

    fn ql(&self, kws: &[String]) -> Result<()> {
        self.rpm(&["-ql"], kws)
    }

    fn qm(&self, kws: &[String]) -> Result<()> {
        self.query(&["list", "--extras"], kws)
    }

    fn qo(&self, kws: &[String]) -> Result<()> {
        self.rpm(&["-qf"], kws)
    }

    fn qp(&self, kws: &[String]) -> Result<()> {
        self.rpm(&["-qip"], kws)
    }

    fn qs(&self, kws: &[String]) -> Result<()> {
        let listing = Cmd::new("rpm", &["-qa"]);
        super::search_listing(&self.engine, &listing, kws)
    }

    fn qu(&self, kws: &[String]) -> Result<()> {
        self.query(&["list", "--upgrades"], kws)
    }

    fn r(&self, kws: &[String]) -> Result<()> {
        self.change(&["remove"], kws)
    }

    fn rs(&self, kws: &[String]) -> Result<()> {
        self.change(&["autoremove"], kws)
    }

    fn s(&self, kws: &[String]) -> Result<()> {
        self.change(&["install"], kws)?;
        clean_after_install(self, Op::Sccc)
    }

    fn sc(&self, kws: &[String]) -> Result<()> {
        self.change(&["clean", "expire-cache"], kws)
    }

    fn scc(&self, kws: &[String]) -> Result<()> {
        self.change(&["clean", "packages"], kws)
    }

    fn sccc(&self, kws: &[String]) -> Result<()> {
        self.change(&["clean", "all"], kws)
    }

    /// Lists groups, or shows the members of the named ones.
    fn sg(&self, kws: &[String]) -> Result<()> {
        if kws.is_empty() {
            self.query(&["group", "list"], kws)
        } else {
            self.query(&["group", "info"], kws)
        }
    }

    fn si(&self, kws: &[String]) -> Result<()> {
        self.query(&["info"], kws)
    }

    fn sii(&self, kws: &[String]) -> Result<()> {
        self.query(&["repoquery", "--whatrequires"], kws)
    }

    fn sl(&self, kws: &[String]) -> Result<()> {
        self.query(&["list", "--available"], kws)
    }

    fn ss(&self, kws: &[String]) -> Result<()> {
        self.query(&["search"], kws)
    }

    fn su(&self, kws: &[String]) -> Result<()> {
        self.change(&["upgrade"], kws)
    }

    fn sw(&self, kws: &[String]) -> Result<()> {
        self.query(&["download"], kws)
    }

    fn sy(&self, kws: &[String]) -> Result<()> {
        self.change(&["makecache"], &[])?;
        if kws.is_empty() {
            Ok(())
        } else {
            self.s(kws)
        }
    }

    /// dnf installs local rpm files the same way as repository packages.
    fn u(&self, kws: &[String]) -> Result<()> {
        self.s(kws)
    }
}
