//! Command-line argument definition and processing.

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::error::Result;
use crate::request::{ExecMode, Modifiers, Operation, Request};

/// pacmux - pacman-style commands for whichever package manager is installed
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "pacmux")]
#[command(version)]
#[command(about = "Run pacman-style commands (-Syu, -Qs, -Rns) with the host's package manager", long_about = None)]
pub struct Args {
    /// Query the local package database
    #[arg(short = 'Q', long, action = ArgAction::Count)]
    pub query: u8,

    /// Remove packages
    #[arg(short = 'R', long, action = ArgAction::Count)]
    pub remove: u8,

    /// Synchronize packages
    #[arg(short = 'S', long, action = ArgAction::Count)]
    pub sync: u8,

    /// Upgrade or add local package files
    #[arg(short = 'U', long, action = ArgAction::Count)]
    pub upgrade: u8,

    /// Clean the cache (-S, repeat for more) or show the changelog (-Q)
    #[arg(short = 'c', long, visible_alias = "changelog", action = ArgAction::Count)]
    pub clean: u8,

    /// List explicitly installed packages (-Q)
    #[arg(short = 'e', long, action = ArgAction::Count)]
    pub explicit: u8,

    /// List groups or their members (-S)
    #[arg(short = 'g', long, action = ArgAction::Count)]
    pub groups: u8,

    /// Show package information (repeat under -S for reverse dependencies)
    #[arg(short = 'i', long, action = ArgAction::Count)]
    pub info: u8,

    /// Check installed package files (-Q)
    #[arg(short = 'k', long, action = ArgAction::Count)]
    pub check: u8,

    /// List package files (-Q) or available packages (-S)
    #[arg(short = 'l', long, action = ArgAction::Count)]
    pub list: u8,

    /// List foreign packages (-Q)
    #[arg(short = 'm', long, action = ArgAction::Count)]
    pub foreign: u8,

    /// Remove configuration files too (-R)
    #[arg(short = 'n', long, action = ArgAction::Count)]
    pub nosave: u8,

    /// Find the package owning a file (-Q)
    #[arg(short = 'o', long, action = ArgAction::Count)]
    pub owns: u8,

    /// Query a package file (-Q), or only print commands (-R, -S, -U)
    #[arg(short = 'p', long, visible_alias = "file", action = ArgAction::Count)]
    pub print: u8,

    /// Search (-Q, -S) or remove unneeded dependencies (-R)
    #[arg(short = 's', long, visible_alias = "recursive", action = ArgAction::Count)]
    pub search: u8,

    /// Upgrade installed packages (-S) or list outdated ones (-Q)
    #[arg(short = 'u', long, visible_alias = "upgrades", action = ArgAction::Count)]
    pub sysupgrade: u8,

    /// Download packages without installing (-S)
    #[arg(short = 'w', long, action = ArgAction::Count)]
    pub downloadonly: u8,

    /// Refresh the package database (-S)
    #[arg(short = 'y', long, action = ArgAction::Count)]
    pub refresh: u8,

    /// Print the native commands instead of running them
    #[arg(long, visible_alias = "dryrun")]
    pub dry_run: bool,

    /// Do not ask for any confirmation
    #[arg(long, visible_aliases = ["noconfirm", "yes"])]
    pub no_confirm: bool,

    /// Do not reinstall packages that are already installed
    #[arg(long)]
    pub needed: bool,

    /// Clean the package cache after installing
    #[arg(long, visible_alias = "nocache")]
    pub no_cache: bool,

    /// Treat Homebrew packages as casks without inspecting them
    #[arg(long, visible_aliases = ["force-cask", "forcecask"])]
    pub cask: bool,

    /// Use this package manager instead of detecting one (brew, apt, choco, dnf)
    #[arg(long, visible_alias = "pm", value_name = "PM")]
    pub using: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Package names, search terms, or file paths
    #[arg(value_name = "KEYWORDS")]
    pub keywords: Vec<String>,

    /// Native flags passed untouched to the package manager, after `--`
    #[arg(last = true, value_name = "EXTRA_FLAGS")]
    pub extra_flags: Vec<String>,
}

impl Args {
    /// What: Every top-level operation flag, repeated as often as it was given.
    ///
    /// Inputs:
    /// - `self`: Parsed arguments.
    ///
    /// Output:
    /// - Operations in `Q R S U` order.
    #[must_use]
    pub fn operations(&self) -> Vec<Operation> {
        [
            (self.query, Operation::Query),
            (self.remove, Operation::Remove),
            (self.sync, Operation::Sync),
            (self.upgrade, Operation::Upgrade),
        ]
        .into_iter()
        .flat_map(|(n, op)| std::iter::repeat_n(op, usize::from(n)))
        .collect()
    }

    /// What: Collect the modifier counters.
    ///
    /// Output:
    /// - Counters keyed by letter.
    ///
    /// # Errors
    /// - Never in practice; every letter used here is a known modifier.
    pub fn modifiers(&self) -> Result<Modifiers> {
        [
            ('c', self.clean),
            ('e', self.explicit),
            ('g', self.groups),
            ('i', self.info),
            ('k', self.check),
            ('l', self.list),
            ('m', self.foreign),
            ('n', self.nosave),
            ('o', self.owns),
            ('p', self.print),
            ('s', self.search),
            ('u', self.sysupgrade),
            ('w', self.downloadonly),
            ('y', self.refresh),
        ]
        .into_iter()
        .try_fold(Modifiers::default(), |m, (letter, n)| m.with(letter, n))
    }

    /// What: Build the request, merging in config defaults.
    ///
    /// Inputs:
    /// - `config`: Loaded configuration.
    ///
    /// Output:
    /// - The request to dispatch.
    ///
    /// # Errors
    /// - `InvalidRequest` unless exactly one operation was given.
    ///
    /// Details:
    /// - `-p` under `-R`, `-S`, or `-U` turns on dry-run, like pacman's `--print`.
    /// - A switch is on when either the command line or the config turns it on.
    /// - Words after `--` travel as pass-through flags, never as keywords.
    pub fn to_request(&self, config: &Config) -> Result<Request> {
        let operations = self.operations();
        let modifiers = self.modifiers()?;
        let prints = self.print > 0
            && matches!(
                operations.as_slice(),
                [Operation::Remove | Operation::Sync | Operation::Upgrade]
            );
        let mode = ExecMode {
            dry_run: self.dry_run || config.dry_run || prints,
            no_confirm: self.no_confirm || config.no_confirm,
            needed: self.needed || config.needed,
            no_cache: self.no_cache || config.no_cache,
            force_cask: self.cask,
        };
        let request =
            Request::from_operations(&operations, modifiers, self.keywords.clone(), mode)?;
        Ok(request.with_flags(self.extra_flags.clone()))
    }
}
