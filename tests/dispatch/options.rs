//! Pass-through flags and the install strategy switches.

#![cfg(test)]

use clap::Parser;
use pacmux::args::Args;
use pacmux::backend::apt::Apt;
use pacmux::backend::chocolatey::Chocolatey;
use pacmux::backend::homebrew::Homebrew;
use pacmux::config::Config;
use pacmux::{Backend, BackendKind, ExecMode, dispatch};

use crate::helpers::{RecordingHost, engine, engine_with, kws};

/// Switches for a confirmed, real run with one strategy toggled by `set`.
fn mode(set: impl FnOnce(&mut ExecMode)) -> ExecMode {
    let mut mode = ExecMode {
        no_confirm: true,
        ..ExecMode::default()
    };
    set(&mut mode);
    mode
}

#[test]
/// What: Flags after `--` reach the native argv ahead of the keywords.
///
/// Inputs:
/// - `pacmux -S vim -- --proxy=x` against apt, run as root.
///
/// Output:
/// - `apt-get install --reinstall --proxy=x vim`.
fn options_extra_flags_reach_native_command() {
    let args = Args::try_parse_from(["pacmux", "-S", "vim", "--", "--proxy=x"])
        .expect("valid command line");
    let request = args.to_request(&Config::default()).expect("valid request");
    let host = RecordingHost::new();
    host.as_root();
    let backend =
        BackendKind::Apt.build(engine(&host, false, false).with_flags(request.flags()));
    dispatch(&request, backend.as_ref()).expect("install runs");
    assert_eq!(
        host.spawned_lines(),
        ["apt-get install --reinstall --proxy=x vim"]
    );
}

#[test]
/// What: Every command of a composite operation gets the pass-through flags.
///
/// Inputs:
/// - Homebrew `-S jq` with `--verbose` passed through.
///
/// Output:
/// - Both the inspection and the install carry `--verbose` before `jq`.
fn options_extra_flags_apply_to_inspection_too() {
    let host = RecordingHost::new();
    host.respond(0, "jq: stable 1.7.1\n");
    let flags = kws(&["--verbose"]);
    Homebrew::new(engine(&host, false, true).with_flags(&flags))
        .s(&kws(&["jq"]))
        .expect("install runs");
    assert_eq!(
        host.spawned_lines(),
        ["brew info --verbose jq", "brew reinstall --verbose jq"]
    );
}

#[test]
/// What: `--needed` keeps installed packages instead of reinstalling them.
///
/// Inputs:
/// - `-S` with `needed` on, against apt, Homebrew, and Chocolatey.
///
/// Output:
/// - Plain install verbs with no reinstall or force flag.
fn options_needed_uses_plain_install() {
    let needed = mode(|m| m.needed = true);

    let host = RecordingHost::new();
    host.as_root();
    Apt::new(engine_with(&host, needed))
        .s(&kws(&["vim"]))
        .expect("apt installs");
    assert_eq!(host.spawned_lines(), ["apt-get install --yes vim"]);

    let host = RecordingHost::new();
    host.respond(0, "jq: stable 1.7.1\n");
    Homebrew::new(engine_with(&host, needed))
        .s(&kws(&["jq"]))
        .expect("brew installs");
    assert_eq!(host.spawned_lines(), ["brew info jq", "brew install jq"]);

    let host = RecordingHost::new();
    Chocolatey::new(engine_with(&host, needed))
        .s(&kws(&["git"]))
        .expect("choco installs");
    assert_eq!(host.spawned_lines(), ["choco install --yes git"]);
}

#[test]
/// What: Without `--needed`, Chocolatey forces a reinstall like pacman does.
fn options_default_install_reinstalls() {
    let host = RecordingHost::new();
    Chocolatey::new(engine(&host, false, true))
        .s(&kws(&["git"]))
        .expect("choco installs");
    assert_eq!(host.spawned_lines(), ["choco install --force --yes git"]);
}

#[test]
/// What: `--no-cache` cleans the cache once the install succeeded.
///
/// Inputs:
/// - `-S vim` on apt and `-S jq` on Homebrew with `no_cache` on.
///
/// Output:
/// - The install, then `autoclean` or `cleanup -s`, with an `Info` line before the cleanup.
fn options_no_cache_cleans_after_install() {
    let no_cache = mode(|m| m.no_cache = true);

    let host = RecordingHost::new();
    host.as_root();
    Apt::new(engine_with(&host, no_cache))
        .s(&kws(&["vim"]))
        .expect("apt installs");
    assert_eq!(
        host.spawned_lines(),
        [
            "apt-get install --reinstall --yes vim",
            "apt-get autoclean --yes",
        ]
    );
    assert!(
        host.echoes
            .borrow()
            .iter()
            .any(|l| l == "     Info removing cached packages")
    );

    let host = RecordingHost::new();
    host.respond(0, "jq: stable 1.7.1\n");
    Homebrew::new(engine_with(&host, no_cache))
        .s(&kws(&["jq"]))
        .expect("brew installs");
    assert_eq!(
        host.spawned_lines(),
        ["brew info jq", "brew reinstall jq", "brew cleanup -s"]
    );
}

#[test]
/// What: A failed install skips the cache cleanup.
fn options_no_cache_skipped_after_failure() {
    let host = RecordingHost::new();
    host.as_root();
    host.respond(100, "");
    let err = Apt::new(engine_with(&host, mode(|m| m.no_cache = true)))
        .s(&kws(&["vim"]))
        .expect_err("install fails");
    assert!(err.is_execution_failure());
    assert_eq!(
        host.spawned_lines(),
        ["apt-get install --reinstall --yes vim"]
    );
}

#[test]
/// What: Dry-run prints the cleanup that `--no-cache` would run.
fn options_no_cache_in_dry_run_is_printed() {
    let host = RecordingHost::new();
    host.as_root();
    let dry = ExecMode {
        dry_run: true,
        no_cache: true,
        ..ExecMode::default()
    };
    BackendKind::Dnf
        .build(engine_with(&host, dry))
        .s(&kws(&["bash"]))
        .expect("dry run");
    assert!(host.spawned.borrow().is_empty());
    assert_eq!(
        *host.echoes.borrow(),
        [
            "  Pending `dnf install bash`",
            "     Info removing cached packages",
            "  Pending `dnf clean all`",
        ]
    );
}

#[test]
/// What: `--cask` skips the inspection and uses the cask commands.
///
/// Inputs:
/// - `-S docker`, `-Su`, and `-Si docker` on Homebrew with `force_cask` on.
///
/// Output:
/// - `reinstall --cask docker`, `upgrade --cask`, `info --cask docker`; no `brew info` inspection.
fn options_force_cask_skips_inspection() {
    let host = RecordingHost::new();
    let brew = Homebrew::new(engine_with(&host, mode(|m| m.force_cask = true)));
    brew.s(&kws(&["docker"])).expect("install runs");
    brew.su(&[]).expect("upgrade runs");
    brew.si(&kws(&["docker"])).expect("info runs");
    assert_eq!(
        host.spawned_lines(),
        [
            "brew reinstall --cask docker",
            "brew upgrade --cask",
            "brew info --cask docker",
        ]
    );
}

#[test]
/// What: Homebrew install and remove without keywords still run brew.
///
/// Inputs:
/// - `-S` and `-R` with no keywords.
///
/// Output:
/// - Bare `brew reinstall` and `brew uninstall`, so brew reports the missing names itself.
fn options_homebrew_empty_keywords_run_native_command() {
    let host = RecordingHost::new();
    host.respond(1, "Error: Invalid usage: This command requires a formula argument\n");
    let brew = Homebrew::new(engine(&host, false, true));
    let err = brew.s(&[]).expect_err("brew rejects the empty install");
    assert!(err.is_execution_failure());
    brew.r(&[]).expect("second run succeeds in the double");
    assert_eq!(host.spawned_lines(), ["brew reinstall", "brew uninstall"]);
}
