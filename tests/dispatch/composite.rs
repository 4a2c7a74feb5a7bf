//! Composite operations: ordering and short-circuiting.

#![cfg(test)]

use pacmux::backend::apt::Apt;
use pacmux::backend::homebrew::Homebrew;
use pacmux::{Backend, Error, ExecMode, Modifiers, Operation, Request, dispatch};

use crate::helpers::{RecordingBackend, RecordingHost, engine, kws};

#[test]
/// What: `-Syu` runs the refresh before the upgrade, end to end.
///
/// Inputs:
/// - A request built from `-S` with `yu`, dispatched to a backend whose
///   refresh is `pm update` and upgrade is `pm upgrade`.
///
/// Output:
/// - Two spawns, `pm update` then `pm upgrade`.
fn composite_suy_refreshes_then_upgrades() {
    let host = RecordingHost::new();
    let backend = RecordingBackend::new(engine(&host, false, false));
    let request = Request::new(
        Operation::Sync,
        "yu".parse::<Modifiers>().expect("valid"),
        vec![],
        ExecMode::default(),
    );

    dispatch(&request, &backend).expect("both steps succeed");

    assert_eq!(host.spawned_lines(), ["pm update", "pm upgrade"]);
    assert_eq!(*backend.calls.borrow(), ["sy", "su"]);
}

#[test]
/// What: A failed refresh means the upgrade never starts.
///
/// Inputs:
/// - The refresh exits 100.
///
/// Output:
/// - `ExecutionFailure` with code 100; `su` is never called.
fn composite_suy_short_circuits_on_refresh_failure() {
    let host = RecordingHost::new();
    host.respond(100, "");
    let backend = RecordingBackend::new(engine(&host, false, false));

    let err = backend.suy(&kws(&["vim"])).expect_err("refresh fails");

    assert!(matches!(err, Error::ExecutionFailure { code: Some(100), .. }));
    assert_eq!(err.exit_code(), 100);
    assert_eq!(*backend.calls.borrow(), ["sy"]);
    assert_eq!(host.spawned_lines(), ["pm update"]);
}

#[test]
/// What: The default composite passes keywords only to the upgrade.
fn composite_suy_keywords_go_to_upgrade() {
    let host = RecordingHost::new();
    let backend = RecordingBackend::new(engine(&host, false, false));
    backend.suy(&kws(&["vim"])).expect("succeeds");
    assert_eq!(host.spawned_lines(), ["pm update", "pm upgrade vim"]);
}

#[test]
/// What: Apt's full upgrade is `upgrade` then `dist-upgrade`, stopping on failure.
///
/// Inputs:
/// - A root host; first run succeeds, then a second backend whose first run fails.
///
/// Output:
/// - Two spawns on success; one spawn on failure.
fn composite_apt_su_runs_both_steps() {
    let host = RecordingHost::new();
    host.as_root();
    Apt::new(engine(&host, false, false))
        .su(&[])
        .expect("both steps succeed");
    assert_eq!(
        host.spawned_lines(),
        ["apt-get upgrade", "apt-get dist-upgrade"]
    );

    let host = RecordingHost::new();
    host.as_root();
    host.respond(1, "");
    let err = Apt::new(engine(&host, false, false))
        .su(&[])
        .expect_err("first step fails");
    assert!(err.is_execution_failure());
    assert_eq!(host.spawned_lines(), ["apt-get upgrade"]);
}

#[test]
/// What: Apt `-Syu` in no-confirm mode as a normal user.
///
/// Inputs:
/// - Non-root host, no-confirm on.
///
/// Output:
/// - `sudo` and `--yes` on every step: update, upgrade, dist-upgrade.
fn composite_apt_suy_uses_sudo_and_yes() {
    let host = RecordingHost::new();
    Apt::new(engine(&host, false, true))
        .suy(&[])
        .expect("all steps succeed");
    assert_eq!(
        host.spawned_lines(),
        [
            "sudo apt-get update --yes",
            "sudo apt-get upgrade --yes",
            "sudo apt-get dist-upgrade --yes",
        ]
    );
}

#[test]
/// What: Apt `-Sy pkg` refreshes, then installs.
fn composite_apt_sy_with_keywords_installs() {
    let host = RecordingHost::new();
    host.as_root();
    Apt::new(engine(&host, false, false))
        .sy(&kws(&["vim"]))
        .expect("succeeds");
    assert_eq!(
        host.spawned_lines(),
        ["apt-get update", "apt-get install --reinstall vim"]
    );
}

#[test]
/// What: Homebrew `-Rs` removes each keyword, then runs autoremove.
///
/// Inputs:
/// - `brew info jq` reports a formula; no-confirm on.
///
/// Output:
/// - `brew info jq`, `brew uninstall jq`, `brew autoremove`.
fn composite_homebrew_rs_autoremoves_last() {
    let host = RecordingHost::new();
    host.respond(0, "jq: stable 1.7\n");
    Homebrew::new(engine(&host, false, true))
        .rs(&kws(&["jq"]))
        .expect("succeeds");
    assert_eq!(
        host.spawned_lines(),
        ["brew info jq", "brew uninstall jq", "brew autoremove"]
    );
}
