//! Formula versus cask classification on Homebrew.

#![cfg(test)]

use pacmux::backend::homebrew::Homebrew;
use pacmux::{Backend, Error};

use crate::helpers::{RecordingHost, engine, kws};

/// Output of `brew info` for a name that only exists as a cask.
const CASK_INFO: &str = "Warning: Treating firefox as a cask.\n\
Error: No available formula with the name \"firefox\".\n\
Found a cask named \"firefox\" instead.\n";

#[test]
/// What: A cask is installed with `--cask`, a formula without.
///
/// Inputs:
/// - `-S firefox jq`: firefox inspects as a cask (exit 1), jq as a formula.
///
/// Output:
/// - Inspection then reinstall for each keyword, in keyword order.
fn classify_installs_by_channel() {
    let host = RecordingHost::new();
    host.respond(1, CASK_INFO);
    host.respond(0, "");
    host.respond(0, "jq: stable 1.7.1\n");
    Homebrew::new(engine(&host, false, true))
        .s(&kws(&["firefox", "jq"]))
        .expect("both install");
    assert_eq!(
        host.spawned_lines(),
        [
            "brew info firefox",
            "brew reinstall --cask firefox",
            "brew info jq",
            "brew reinstall jq",
        ]
    );
}

#[test]
/// What: Unknown names still go to plain `brew reinstall`, which reports them.
fn classify_unavailable_uses_plain_verb() {
    let host = RecordingHost::new();
    host.respond(1, "Error: No available formula with the name \"nope\".\n");
    Homebrew::new(engine(&host, false, true))
        .s(&kws(&["nope"]))
        .expect("install command runs");
    assert_eq!(host.spawned_lines(), ["brew info nope", "brew reinstall nope"]);
}

#[test]
/// What: A failed inspection with no marker is ambiguous and stops the batch.
///
/// Inputs:
/// - `-R a b`: inspecting `a` fails with an unrelated error.
///
/// Output:
/// - `ClassificationAmbiguous` carrying the text; `b` is never inspected.
fn classify_ambiguous_failure_stops() {
    let host = RecordingHost::new();
    host.respond(1, "Error: Could not resolve host\n");
    let err = Homebrew::new(engine(&host, false, true))
        .r(&kws(&["a", "b"]))
        .expect_err("ambiguous");
    match &err {
        Error::ClassificationAmbiguous {
            package, output, ..
        } => {
            assert_eq!(package, "a");
            assert!(output.contains("Could not resolve host"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(err.is_execution_failure());
    assert_eq!(host.spawned_lines(), ["brew info a"]);
}

#[test]
/// What: Declining the confirmation skips the install but is not an error.
///
/// Inputs:
/// - Confirmation on, host answers no.
///
/// Output:
/// - Only the inspection runs; a `Canceled` line is printed.
fn classify_declined_install_is_canceled() {
    let host = RecordingHost::new();
    host.decline();
    host.respond(0, "jq: stable 1.7.1\n");
    Homebrew::new(engine(&host, false, false))
        .s(&kws(&["jq"]))
        .expect("declining is fine");
    assert_eq!(host.spawned_lines(), ["brew info jq"]);
    assert_eq!(host.questions.borrow().len(), 1);
    assert!(
        host.echoes
            .borrow()
            .iter()
            .any(|l| l == " Canceled `brew reinstall jq`")
    );
}
