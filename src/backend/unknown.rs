//! Stand-in used when no supported package manager is found.

use crate::backend::Backend;
use crate::dispatch::Op;
use crate::error::Result;
use crate::exec::Engine;

/// Rejects every operation, including the composite `Suy`.
#[derive(Debug, Clone)]
pub struct Unknown {
    /// Kept so the contract is uniform; never used to run anything.
    engine: Engine,
}

impl Unknown {
    /// Wrap an engine.
    #[must_use]
    pub const fn new(engine: Engine) -> Self {
        Self { engine }
    }
}

impl Backend for Unknown {
    fn name(&self) -> &'static str {
        "unknown"
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn suy(&self, _kws: &[String]) -> Result<()> {
        Err(self.unsupported(Op::Suy))
    }
}
