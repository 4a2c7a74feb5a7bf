//! Library entry for pacmux exposing the dispatch engine for the binary and integration tests.

pub mod args;
pub mod backend;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exec;
pub mod logging;
/// XDG config and logs directories.
pub mod paths;
pub mod print;
pub mod request;

pub use backend::{Backend, BackendKind};
pub use dispatch::{Op, dispatch, resolve};
pub use error::{Error, Result};
pub use request::{ExecMode, Modifiers, Operation, Request};
