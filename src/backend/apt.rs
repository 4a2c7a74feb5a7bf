//! Debian family: `apt-get`, `apt-cache`, and the `dpkg` tools.

use crate::backend::{Backend, clean_after_install};
use crate::dispatch::Op;
use crate::error::Result;
use crate::exec::{Cmd, Confirm, Engine};

/// The apt backend.
#[derive(Debug, Clone)]
pub struct Apt {
    /// Command engine.
    engine: Engine,
}

impl Apt {
    /// Wrap an engine.
    #[must_use]
    pub const fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Read-only query through any program.
    fn query(&self, program: &str, words: &[&str], kws: &[String]) -> Result<()> {
        self.engine.run_or_print(&Cmd::new(program, words).kws(kws))
    }

    /// What: Run a mutating `apt-get` subcommand as root.
    ///
    /// Inputs:
    /// - `words`: Subcommand and its fixed flags.
    /// - `kws`: Package names.
    ///
    /// Output:
    /// - Result of the run.
    ///
    /// Details:
    /// - `--yes` is added only in no-confirm mode; apt asks by itself otherwise.
    fn apt_get(&self, words: &[&str], kws: &[String]) -> Result<()> {
        let cmd = Cmd::sudo("apt-get", words)
            .kws(kws)
            .confirm(Confirm::native(&["--yes"]));
        self.engine.run_or_print(&cmd)
    }
}

impl Backend for Apt {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn q(&self, kws: &[String]) -> Result<()> {
        self.query("dpkg", &["-l"], kws)
    }

    fn qc(&self, kws: &[String]) -> Result<()> {
        self.query("apt-get", &["changelog"], kws)
    }

    fn qe(&self, kws: &[String]) -> Result<()> {
        self.query("apt-mark", &["showmanual"], kws)
    }

    fn qi(&self, kws: &[String]) -> Result<()> {
        self.query("dpkg-query", &["-s"], kws)
    }

    fn ql(&self, kws: &[String]) -> Result<()> {
        self.query("dpkg-query", &["-L"], kws)
    }

    fn qo(&self, kws: &[String]) -> Result<()> {
        self.query("dpkg-query", &["-S"], kws)
    }

    fn qp(&self, kws: &[String]) -> Result<()> {
        self.query("dpkg-deb", &["-I"], kws)
    }

    fn qs(&self, kws: &[String]) -> Result<()> {
        let listing = Cmd::new("dpkg-query", &["-W"]);
        super::search_listing(&self.engine, &listing, kws)
    }

    fn qu(&self, kws: &[String]) -> Result<()> {
        self.query("apt", &["list", "--upgradable"], kws)
    }

    fn r(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["remove"], kws)
    }

    fn rn(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["purge"], kws)
    }

    fn rns(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["autoremove", "--purge"], kws)
    }

    fn rs(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["autoremove"], kws)
    }

    /// Installed packages are reinstalled unless `--needed` is on.
    fn s(&self, kws: &[String]) -> Result<()> {
        if self.engine.mode().needed {
            self.apt_get(&["install"], kws)?;
        } else {
            self.apt_get(&["install", "--reinstall"], kws)?;
        }
        clean_after_install(self, Op::Scc)
    }

    fn sc(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["clean"], kws)
    }

    fn scc(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["autoclean"], kws)
    }

    fn si(&self, kws: &[String]) -> Result<()> {
        self.query("apt-cache", &["show"], kws)
    }

    fn sii(&self, kws: &[String]) -> Result<()> {
        self.query("apt-cache", &["rdepends"], kws)
    }

    fn sl(&self, kws: &[String]) -> Result<()> {
        self.query("apt-cache", &["pkgnames"], kws)
    }

    fn ss(&self, kws: &[String]) -> Result<()> {
        self.query("apt-cache", &["search"], kws)
    }

    /// A full upgrade is `upgrade` followed by `dist-upgrade`; named packages
    /// are upgraded in place only if already installed.
    fn su(&self, kws: &[String]) -> Result<()> {
        if kws.is_empty() {
            self.apt_get(&["upgrade"], kws)?;
            self.apt_get(&["dist-upgrade"], kws)
        } else {
            self.apt_get(&["install", "--only-upgrade"], kws)
        }
    }

    fn sw(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["install", "--download-only"], kws)
    }

    /// `-Sy pkg` refreshes, then installs `pkg`.
    fn sy(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["update"], &[])?;
        if kws.is_empty() {
            Ok(())
        } else {
            self.s(kws)
        }
    }

    /// Local `.deb` files go through `apt-get install` so dependencies resolve.
    fn u(&self, kws: &[String]) -> Result<()> {
        self.apt_get(&["install"], kws)
    }
}
