//! Dry-run mode: commands are printed, never run, and output is repeatable.

#![cfg(test)]

use pacmux::{BackendKind, ExecMode, Modifiers, Operation, Request, dispatch};

use crate::helpers::{RecordingHost, engine, kws};

/// Dispatch `-<op><letters> <words>` to `kind` in dry-run mode and return the echoes.
fn dry_echoes(kind: BackendKind, op: Operation, letters: &str, words: &[&str]) -> Vec<String> {
    let host = RecordingHost::new();
    let request = Request::new(
        op,
        letters.parse::<Modifiers>().expect("valid"),
        kws(words),
        ExecMode {
            dry_run: true,
            ..ExecMode::default()
        },
    );
    let backend = kind.build(engine(&host, true, false));
    dispatch(&request, backend.as_ref()).expect("dry run succeeds");
    assert!(host.spawned.borrow().is_empty(), "dry run spawned a process");
    assert!(host.questions.borrow().is_empty(), "dry run asked a question");
    host.echoes.take()
}

#[test]
/// What: Running the same dry-run request twice prints the same lines.
///
/// Inputs:
/// - `-Syu` on apt, twice.
///
/// Output:
/// - Identical `Pending` lines both times, zero spawns.
fn dry_run_is_idempotent() {
    let first = dry_echoes(BackendKind::Apt, Operation::Sync, "yu", &[]);
    let second = dry_echoes(BackendKind::Apt, Operation::Sync, "yu", &[]);
    assert_eq!(first, second);
    assert_eq!(
        first,
        [
            "  Pending `sudo apt-get update`",
            "  Pending `sudo apt-get upgrade`",
            "  Pending `sudo apt-get dist-upgrade`",
        ]
    );
}

#[test]
/// What: Dry-run skips confirmation prompts for asking commands.
fn dry_run_skips_confirmation() {
    let echoes = dry_echoes(BackendKind::Homebrew, Operation::Sync, "u", &[]);
    assert_eq!(echoes, ["  Pending `brew upgrade`"]);
}

#[test]
/// What: Search-by-listing only prints the listing command in dry-run mode.
fn dry_run_search_prints_listing() {
    let echoes = dry_echoes(BackendKind::Dnf, Operation::Query, "s", &["foo", "bar"]);
    assert_eq!(echoes, ["  Pending `rpm -qa`"]);
}

#[test]
/// What: Keyword and flag order in printed commands.
fn dry_run_prints_keywords_last() {
    let echoes = dry_echoes(BackendKind::Dnf, Operation::Sync, "ii", &["bash"]);
    assert_eq!(echoes, ["  Pending `dnf repoquery --whatrequires bash`"]);
}

#[test]
/// What: The same `Cmd` printed twice gives identical output and no spawns.
fn dry_run_run_or_print_twice() {
    let host = RecordingHost::new();
    let engine = engine(&host, true, false);
    let cmd = pacmux::exec::Cmd::sudo("pm", &["install"]).kws(&["a", "b"]);
    engine.run_or_print(&cmd).expect("first");
    engine.run_or_print(&cmd).expect("second");
    let echoes = host.echoes.borrow();
    assert_eq!(echoes.len(), 2);
    assert_eq!(echoes[0], echoes[1]);
    assert_eq!(echoes[0], "  Pending `sudo pm install a b`");
    assert!(host.spawned.borrow().is_empty());
}
