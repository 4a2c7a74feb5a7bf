//! The 29 logical operations a request can resolve to.

use std::fmt;

use crate::backend::Backend;
use crate::error::Result;

/// A resolved logical operation, named after its canonical pacman flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Op {
    Q,
    Qc,
    Qe,
    Qi,
    Qk,
    Ql,
    Qm,
    Qo,
    Qp,
    Qs,
    Qu,
    R,
    Rn,
    Rns,
    Rs,
    S,
    Sc,
    Scc,
    Sccc,
    Sg,
    Si,
    Sii,
    Sl,
    Ss,
    Su,
    Suy,
    Sw,
    Sy,
    U,
}

impl Op {
    /// Every operation, in contract order.
    pub const ALL: [Self; 29] = [
        Self::Q,
        Self::Qc,
        Self::Qe,
        Self::Qi,
        Self::Qk,
        Self::Ql,
        Self::Qm,
        Self::Qo,
        Self::Qp,
        Self::Qs,
        Self::Qu,
        Self::R,
        Self::Rn,
        Self::Rns,
        Self::Rs,
        Self::S,
        Self::Sc,
        Self::Scc,
        Self::Sccc,
        Self::Sg,
        Self::Si,
        Self::Sii,
        Self::Sl,
        Self::Ss,
        Self::Su,
        Self::Suy,
        Self::Sw,
        Self::Sy,
        Self::U,
    ];

    /// Stable display name, e.g. `"Suy"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q => "Q",
            Self::Qc => "Qc",
            Self::Qe => "Qe",
            Self::Qi => "Qi",
            Self::Qk => "Qk",
            Self::Ql => "Ql",
            Self::Qm => "Qm",
            Self::Qo => "Qo",
            Self::Qp => "Qp",
            Self::Qs => "Qs",
            Self::Qu => "Qu",
            Self::R => "R",
            Self::Rn => "Rn",
            Self::Rns => "Rns",
            Self::Rs => "Rs",
            Self::S => "S",
            Self::Sc => "Sc",
            Self::Scc => "Scc",
            Self::Sccc => "Sccc",
            Self::Sg => "Sg",
            Self::Si => "Si",
            Self::Sii => "Sii",
            Self::Sl => "Sl",
            Self::Ss => "Ss",
            Self::Su => "Su",
            Self::Suy => "Suy",
            Self::Sw => "Sw",
            Self::Sy => "Sy",
            Self::U => "U",
        }
    }

    /// One-line description of what the operation does.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Q => "list installed packages",
            Self::Qc => "show the changelog of a package",
            Self::Qe => "list packages installed explicitly",
            Self::Qi => "show information about an installed package",
            Self::Qk => "verify installed package files",
            Self::Ql => "list files owned by a package",
            Self::Qm => "list packages not found in any repository",
            Self::Qo => "find the package owning a file",
            Self::Qp => "query a package file instead of the database",
            Self::Qs => "search installed packages",
            Self::Qu => "list outdated packages",
            Self::R => "remove packages",
            Self::Rn => "remove packages and their configuration files",
            Self::Rns => "remove packages, their configuration, and unneeded dependencies",
            Self::Rs => "remove packages and their unneeded dependencies",
            Self::S => "install packages",
            Self::Sc => "remove old packages from the cache",
            Self::Scc => "remove all packages from the cache",
            Self::Sccc => "remove every cached file",
            Self::Sg => "list package groups or their members",
            Self::Si => "show remote package information",
            Self::Sii => "show packages that depend on a package",
            Self::Sl => "list available packages",
            Self::Ss => "search remote repositories",
            Self::Su => "upgrade outdated packages",
            Self::Suy => "refresh the database, then upgrade",
            Self::Sw => "download packages without installing",
            Self::Sy => "refresh the package database",
            Self::U => "install local package files",
        }
    }

    /// What: Call the backend method this operation maps to.
    ///
    /// Inputs:
    /// - `backend`: The selected backend.
    /// - `kws`: Request keywords.
    ///
    /// Output:
    /// - Whatever the backend method returns.
    ///
    /// # Errors
    /// - Propagates the backend's error, including `UnsupportedOperation`.
    pub fn invoke(self, backend: &dyn Backend, kws: &[String]) -> Result<()> {
        match self {
            Self::Q => backend.q(kws),
            Self::Qc => backend.qc(kws),
            Self::Qe => backend.qe(kws),
            Self::Qi => backend.qi(kws),
            Self::Qk => backend.qk(kws),
            Self::Ql => backend.ql(kws),
            Self::Qm => backend.qm(kws),
            Self::Qo => backend.qo(kws),
            Self::Qp => backend.qp(kws),
            Self::Qs => backend.qs(kws),
            Self::Qu => backend.qu(kws),
            Self::R => backend.r(kws),
            Self::Rn => backend.rn(kws),
            Self::Rns => backend.rns(kws),
            Self::Rs => backend.rs(kws),
            Self::S => backend.s(kws),
            Self::Sc => backend.sc(kws),
            Self::Scc => backend.scc(kws),
            Self::Sccc => backend.sccc(kws),
            Self::Sg => backend.sg(kws),
            Self::Si => backend.si(kws),
            Self::Sii => backend.sii(kws),
            Self::Sl => backend.sl(kws),
            Self::Ss => backend.ss(kws),
            Self::Su => backend.su(kws),
            Self::Suy => backend.suy(kws),
            Self::Sw => backend.sw(kws),
            Self::Sy => backend.sy(kws),
            Self::U => backend.u(kws),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
