//! The package-manager contract and its implementations.
//!
//! Every backend exposes the same 29 operations. Anything a backend does not
//! override reports [`Error::UnsupportedOperation`] naming the operation and
//! the backend.

pub mod apt;
pub mod chocolatey;
pub mod classify;
pub mod dnf;
pub mod homebrew;
pub mod select;
pub mod unknown;

pub use select::BackendKind;

use crate::dispatch::Op;
use crate::error::{Error, Result};
use crate::exec::{Cmd, Engine, grep};
use crate::print;

/// A package manager seen through pacman's verbs.
pub trait Backend {
    /// Short name used in messages, e.g. `"apt"`.
    fn name(&self) -> &'static str;

    /// The engine every command goes through.
    fn engine(&self) -> &Engine;

    /// A fresh `UnsupportedOperation` for `op` on this backend.
    fn unsupported(&self, op: Op) -> Error {
        Error::unsupported(op, self.name())
    }

    /// `-Q`: list installed packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn q(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Q))
    }

    /// `-Qc`: show a package changelog.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qc(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qc))
    }

    /// `-Qe`: list explicitly installed packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qe(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qe))
    }

    /// `-Qi`: show installed package information.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qi(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qi))
    }

    /// `-Qk`: verify installed package files.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qk(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qk))
    }

    /// `-Ql`: list files owned by packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn ql(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Ql))
    }

    /// `-Qm`: list foreign packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qm(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qm))
    }

    /// `-Qo`: find the package owning a file.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qo(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qo))
    }

    /// `-Qp`: query a package file.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qp(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qp))
    }

    /// `-Qs`: search installed packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qs(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qs))
    }

    /// `-Qu`: list outdated packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn qu(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Qu))
    }

    /// `-R`: remove packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn r(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::R))
    }

    /// `-Rn`: remove packages and their configuration.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn rn(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Rn))
    }

    /// `-Rns`: remove packages, configuration, and unneeded dependencies.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn rns(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Rns))
    }

    /// `-Rs`: remove packages and unneeded dependencies.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn rs(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Rs))
    }

    /// `-S`: install packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn s(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::S))
    }

    /// `-Sc`: remove old cached packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn sc(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Sc))
    }

    /// `-Scc`: remove all cached packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn scc(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Scc))
    }

    /// `-Sccc`: remove every cached file.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn sccc(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Sccc))
    }

    /// `-Sg`: list groups or group members.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn sg(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Sg))
    }

    /// `-Si`: show remote package information.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn si(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Si))
    }

    /// `-Sii`: show reverse dependencies.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn sii(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Sii))
    }

    /// `-Sl`: list available packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn sl(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Sl))
    }

    /// `-Ss`: search remote repositories.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn ss(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Ss))
    }

    /// `-Su`: upgrade outdated packages.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn su(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Su))
    }

    /// `-Suy`: refresh, then upgrade.
    ///
    /// The refresh runs with no keywords and must succeed before the upgrade
    /// starts; the keywords go to the upgrade.
    ///
    /// # Errors
    /// - The first error of either step.
    fn suy(&self, kws: &[String]) -> Result<()> {
        self.sy(&[])?;
        self.su(kws)
    }

    /// `-Sw`: download without installing.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn sw(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Sw))
    }

    /// `-Sy`: refresh the package database.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn sy(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Sy))
    }

    /// `-U`: install local package files.
    ///
    /// # Errors
    /// - `UnsupportedOperation` unless overridden; execution errors otherwise.
    fn u(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::U))
    }
}

/// What: List with `listing`, then print the lines matching every keyword.
///
/// Inputs:
/// - `engine`: The backend's engine.
/// - `listing`: A command printing one package per line.
/// - `kws`: Search terms, all of which must match.
///
/// Output:
/// - `Ok(())` after printing matches in listing order.
///
/// # Errors
/// - Listing failures and ill-formed search terms.
///
/// Details:
/// - In dry-run mode the listing command is only printed, since the filter
///   has nothing to act on.
pub fn search_listing(engine: &Engine, listing: &Cmd, kws: &[String]) -> Result<()> {
    if engine.mode().dry_run {
        engine.echo(&print::format_cmd(print::PENDING, &engine.argv(listing).join(" ")));
        return Ok(());
    }
    let text = engine.run_muted(listing)?;
    for line in grep(&text, kws)? {
        engine.echo(line);
    }
    Ok(())
}

/// What: Clean the package cache after an install when `no_cache` is on.
///
/// Inputs:
/// - `backend`: The backend that just installed something.
/// - `clean`: The cache-cleaning operation suited to it (`Scc`, `Sccc`).
///
/// Output:
/// - `Ok(())` right away when `no_cache` is off.
///
/// # Errors
/// - Whatever the cleaning operation reports.
///
/// Details:
/// - Dry-run reaches the cleanup too, so its command is printed as well.
pub fn clean_after_install(backend: &dyn Backend, clean: Op) -> Result<()> {
    let engine = backend.engine();
    if !engine.mode().no_cache {
        return Ok(());
    }
    engine.echo(&print::format_info("removing cached packages"));
    clean.invoke(backend, &[])
}
