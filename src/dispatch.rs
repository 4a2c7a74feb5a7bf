//! Turning a request into one backend call.

pub mod op;
pub mod resolve;

pub use op::Op;
pub use resolve::{resolve, resolve_parts};

use crate::backend::Backend;
use crate::error::Result;
use crate::request::Request;

/// What: Resolve `request` and run it on `backend`.
///
/// Inputs:
/// - `request`: The parsed request.
/// - `backend`: The selected backend.
///
/// Output:
/// - `Ok(())` once every native command of the operation has succeeded.
///
/// # Errors
/// - `UnsupportedOperation` when the backend has no translation.
/// - Any execution or classification error raised on the way.
pub fn dispatch(request: &Request, backend: &dyn Backend) -> Result<()> {
    let op = resolve(request)?;
    tracing::info!(
        op = %op,
        what = op.description(),
        backend = backend.name(),
        keywords = ?request.keywords(),
        flags = ?request.flags(),
        dry_run = request.mode().dry_run,
        "dispatching"
    );
    op.invoke(backend, request.keywords())
}
