//! The request model: one pacman-style operation, its modifiers, and its keywords.
//!
//! A [`Request`] is built once per run and never mutated afterwards. Tokenizing
//! argv into this shape is the job of [`crate::args`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Top-level pacman verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `-Q`: query the local package database.
    Query,
    /// `-R`: remove packages.
    Remove,
    /// `-S`: synchronize packages.
    Sync,
    /// `-U`: upgrade or add local package files.
    Upgrade,
}

impl Operation {
    /// The single upper-case letter pacman uses for this operation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Query => 'Q',
            Self::Remove => 'R',
            Self::Sync => 'S',
            Self::Upgrade => 'U',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Query => "query",
            Self::Remove => "remove",
            Self::Sync => "sync",
            Self::Upgrade => "upgrade",
        };
        f.write_str(name)
    }
}

/// Execution-mode switches. They only change how commands run, never which
/// operation gets picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExecMode {
    /// Print commands instead of running them.
    pub dry_run: bool,
    /// Answer yes to every confirmation.
    pub no_confirm: bool,
    /// Skip packages that are already installed instead of reinstalling them.
    pub needed: bool,
    /// Clean the package cache after a successful install.
    pub no_cache: bool,
    /// Treat every Homebrew package as a cask without inspecting it.
    pub force_cask: bool,
}

/// Modifier counters keyed by their single lower-case letter.
///
/// Every modifier is a counter; boolean modifiers are simply `0` or `>= 1`.
/// The same letter means different things under different operations, so
/// this type only stores counts and leaves interpretation to the resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// One slot per letter of [`Modifiers::LETTERS`], in that order.
    counts: [u8; 14],
}

impl Modifiers {
    /// Every modifier letter understood by the resolver.
    pub const LETTERS: &'static str = "cegiklmnopsuwy";

    /// What: Map a modifier letter to its slot in `counts`.
    ///
    /// Inputs:
    /// - `letter`: Modifier letter.
    ///
    /// Output:
    /// - `Some(index)` for a known letter, `None` otherwise.
    fn slot(letter: char) -> Option<usize> {
        Self::LETTERS.find(letter)
    }

    /// How many times `letter` was given. Unknown letters count as `0`.
    #[must_use]
    pub fn count(&self, letter: char) -> u8 {
        Self::slot(letter).map_or(0, |i| self.counts[i])
    }

    /// Whether `letter` was given at least once.
    #[must_use]
    pub fn is_set(&self, letter: char) -> bool {
        self.count(letter) > 0
    }

    /// What: Record `times` more occurrences of `letter`.
    ///
    /// Inputs:
    /// - `letter`: Modifier letter, one of [`Modifiers::LETTERS`].
    /// - `times`: Occurrences to add (saturating).
    ///
    /// Output:
    /// - The updated modifiers, or `InvalidRequest` for an unknown letter.
    ///
    /// # Errors
    /// - Returns [`Error::InvalidRequest`] when `letter` is not a modifier.
    pub fn with(mut self, letter: char, times: u8) -> Result<Self> {
        let i = Self::slot(letter)
            .ok_or_else(|| Error::InvalidRequest(format!("unknown modifier `-{letter}`")))?;
        self.counts[i] = self.counts[i].saturating_add(times);
        Ok(self)
    }
}

impl FromStr for Modifiers {
    type Err = Error;

    /// Parses a cluster of letters such as `"yu"` or `"cc"`.
    fn from_str(letters: &str) -> Result<Self> {
        letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .try_fold(Self::default(), |acc, letter| acc.with(letter, 1))
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, &n) in Self::LETTERS.chars().zip(self.counts.iter()) {
            for _ in 0..n {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// A fully populated package-operation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The one top-level operation.
    operation: Operation,
    /// Modifier counters.
    modifiers: Modifiers,
    /// Package names, search terms, or file paths.
    keywords: Vec<String>,
    /// Native flags passed through untouched, placed before keywords.
    flags: Vec<String>,
    /// Execution-mode switches.
    mode: ExecMode,
}

impl Request {
    /// Build a request around a single operation.
    #[must_use]
    pub const fn new(
        operation: Operation,
        modifiers: Modifiers,
        keywords: Vec<String>,
        mode: ExecMode,
    ) -> Self {
        Self {
            operation,
            modifiers,
            keywords,
            flags: Vec::new(),
            mode,
        }
    }

    /// Attach native flags that every command of this request receives.
    #[must_use]
    pub fn with_flags(mut self, flags: Vec<String>) -> Self {
        self.flags = flags;
        self
    }

    /// What: Build a request from every top-level operation flag that was given.
    ///
    /// Inputs:
    /// - `operations`: All operations present on the command line.
    /// - `modifiers`, `keywords`, `mode`: Stored as-is.
    ///
    /// Output:
    /// - The request when exactly one operation was given.
    ///
    /// # Errors
    /// - Returns [`Error::InvalidRequest`] for zero or several operations.
    pub fn from_operations(
        operations: &[Operation],
        modifiers: Modifiers,
        keywords: Vec<String>,
        mode: ExecMode,
    ) -> Result<Self> {
        let operation = single_operation(operations)?;
        Ok(Self::new(operation, modifiers, keywords, mode))
    }

    /// The top-level operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// The modifier counters.
    #[must_use]
    pub const fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// The keywords in the order given.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Native pass-through flags, in the order given.
    #[must_use]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// The execution-mode switches.
    #[must_use]
    pub const fn mode(&self) -> ExecMode {
        self.mode
    }
}

/// What: Enforce the one-operation invariant.
///
/// Inputs:
/// - `operations`: Operations collected from the command line.
///
/// Output:
/// - The only operation, or `InvalidRequest`.
///
/// Details:
/// - Duplicates of the same operation (`-S -S`) still count as several.
///
/// # Errors
/// - Returns [`Error::InvalidRequest`] unless exactly one operation is present.
pub fn single_operation(operations: &[Operation]) -> Result<Operation> {
    match operations {
        [op] => Ok(*op),
        [] => Err(Error::InvalidRequest(
            "no operation specified (use -Q, -R, -S or -U)".into(),
        )),
        many => {
            let given: String = many.iter().copied().map(Operation::letter).collect();
            Err(Error::InvalidRequest(format!(
                "only one operation may be used at a time, got `-{given}`"
            )))
        }
    }
}
