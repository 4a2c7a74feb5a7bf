//! Unsupported operations are reported, never silently ignored.

#![cfg(test)]

use pacmux::backend::unknown::Unknown;
use pacmux::{Backend, BackendKind, Op};

use crate::helpers::{RecordingHost, engine, is_unsupported, kws};

#[test]
/// What: The unknown backend rejects all 29 operations, including `Suy`.
///
/// Inputs:
/// - Every `Op`, invoked with one keyword.
///
/// Output:
/// - `UnsupportedOperation` naming that op and `unknown`; nothing echoed or spawned.
fn unsupported_unknown_rejects_everything() {
    let host = RecordingHost::new();
    let backend = Unknown::new(engine(&host, false, false));
    for op in Op::ALL {
        let err = op
            .invoke(&backend, &kws(&["pkg"]))
            .expect_err("unknown supports nothing");
        assert!(is_unsupported(&err, op, "unknown"), "{op}: {err}");
    }
    assert!(host.spawned.borrow().is_empty());
    assert!(host.echoes.borrow().is_empty());
}

#[test]
/// What: Each backend's gaps name the backend in the error.
///
/// Inputs:
/// - `Qk` and `Sg` on apt, `Sw` on brew, `Qk` on dnf, `Sl` on choco.
///
/// Output:
/// - `UnsupportedOperation` with the right names; nothing spawned.
fn unsupported_gaps_name_backend() {
    let host = RecordingHost::new();
    let cases = [
        (BackendKind::Apt, Op::Qk, "apt"),
        (BackendKind::Apt, Op::Sg, "apt"),
        (BackendKind::Homebrew, Op::Sw, "brew"),
        (BackendKind::Dnf, Op::Qk, "dnf"),
        (BackendKind::Dnf, Op::Rns, "dnf"),
        (BackendKind::Chocolatey, Op::Sl, "choco"),
    ];
    for (kind, op, name) in cases {
        let backend: Box<dyn Backend> = kind.build(engine(&host, false, false));
        let err = op
            .invoke(backend.as_ref(), &[])
            .expect_err("not translated");
        assert!(is_unsupported(&err, op, name), "{kind} {op}: {err}");
    }
    assert!(host.spawned.borrow().is_empty());
}

#[test]
/// What: Two calls produce two independent errors with the same content.
fn unsupported_error_is_built_per_call() {
    let host = RecordingHost::new();
    let backend = Unknown::new(engine(&host, false, false));
    let first = backend.sw(&[]).expect_err("unsupported").to_string();
    let second = backend.sw(&[]).expect_err("unsupported").to_string();
    assert_eq!(first, second);
    assert_eq!(first, "operation `Sw` is not supported by `unknown`");
}
