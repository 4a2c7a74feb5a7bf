//! Command execution: the `Cmd` value, the host process boundary, and the
//! engine that applies dry-run, confirmation, and capture rules.

pub mod cmd;
pub mod engine;
pub mod grep;
pub mod host;

pub use cmd::{Cmd, Confirm};
pub use engine::Engine;
pub use grep::grep;
pub use host::{Host, Outcome, SystemHost};
