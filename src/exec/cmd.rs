//! The `Cmd` value: a native command line plus how it must be run.

use std::fmt;

/// How a command asks for consent before it changes the system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Confirm {
    /// Read-only or harmless; never asks.
    #[default]
    None,
    /// The native tool asks by itself; these flags silence it and are only
    /// appended in no-confirm mode.
    Native(Vec<String>),
    /// The engine asks a yes/no question before running, unless in no-confirm mode.
    Ask,
}

impl Confirm {
    /// Shorthand for [`Confirm::Native`] from string slices.
    #[must_use]
    pub fn native(flags: &[&str]) -> Self {
        Self::Native(flags.iter().map(ToString::to_string).collect())
    }
}

/// A native command line. The program and its base words come first, then
/// extra flags, then keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    /// Program followed by its fixed subcommand words.
    words: Vec<String>,
    /// Extra flags placed before keywords.
    flags: Vec<String>,
    /// Keywords, always last.
    kws: Vec<String>,
    /// Whether the command needs root.
    sudo: bool,
    /// Confirmation style.
    confirm: Confirm,
}

impl Cmd {
    /// What: Start a command from its program and base words.
    ///
    /// Inputs:
    /// - `program`: Executable name, never empty in practice.
    /// - `words`: Fixed words such as a subcommand (`["install"]`).
    ///
    /// Output:
    /// - A command with no flags, no keywords, no sudo, and no confirmation.
    #[must_use]
    pub fn new(program: &str, words: &[&str]) -> Self {
        let mut all = Vec::with_capacity(words.len() + 1);
        all.push(program.to_string());
        all.extend(words.iter().map(ToString::to_string));
        Self {
            words: all,
            flags: Vec::new(),
            kws: Vec::new(),
            sudo: false,
            confirm: Confirm::None,
        }
    }

    /// Same as [`Cmd::new`] but marked as needing root.
    #[must_use]
    pub fn sudo(program: &str, words: &[&str]) -> Self {
        Self {
            sudo: true,
            ..Self::new(program, words)
        }
    }

    /// Append extra flags.
    #[must_use]
    pub fn flags<S: AsRef<str>>(mut self, flags: &[S]) -> Self {
        self.flags
            .extend(flags.iter().map(|f| f.as_ref().to_string()));
        self
    }

    /// Append keywords.
    #[must_use]
    pub fn kws<S: AsRef<str>>(mut self, kws: &[S]) -> Self {
        self.kws.extend(kws.iter().map(|k| k.as_ref().to_string()));
        self
    }

    /// Set the confirmation style.
    #[must_use]
    pub fn confirm(mut self, confirm: Confirm) -> Self {
        self.confirm = confirm;
        self
    }

    /// The executable name.
    #[must_use]
    pub fn program(&self) -> &str {
        self.words.first().map_or("", String::as_str)
    }

    /// Whether the command needs root.
    #[must_use]
    pub const fn needs_sudo(&self) -> bool {
        self.sudo
    }

    /// The confirmation style.
    #[must_use]
    pub const fn confirm_style(&self) -> &Confirm {
        &self.confirm
    }

    /// What: Build the final argument vector.
    ///
    /// Inputs:
    /// - `no_confirm`: Whether native no-confirm flags should be added.
    /// - `elevate`: Whether to prefix `sudo`.
    ///
    /// Output:
    /// - `[sudo] words.. flags.. native-flags.. kws..`
    #[must_use]
    pub fn argv(&self, no_confirm: bool, elevate: bool) -> Vec<String> {
        let native: &[String] = match &self.confirm {
            Confirm::Native(flags) if no_confirm => flags,
            _ => &[],
        };
        let sudo = elevate.then(|| "sudo".to_string());
        sudo.into_iter()
            .chain(self.words.iter().cloned())
            .chain(self.flags.iter().cloned())
            .chain(native.iter().cloned())
            .chain(self.kws.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv(false, false).join(" "))
    }
}
