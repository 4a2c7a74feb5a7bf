//! AND-matching of several search terms against captured output lines.

use regex::Regex;

use crate::error::{Error, Result};

/// What: Keep the lines of `text` that match every pattern.
///
/// Inputs:
/// - `text`: Captured command output.
/// - `patterns`: Regular expressions; all must match a line for it to be kept.
///
/// Output:
/// - Matching lines in their original order, without deduplication.
///
/// # Errors
/// - Returns [`Error::Pattern`] for the first pattern that fails to compile.
///
/// Details:
/// - With no patterns every line is kept.
pub fn grep<'t, S: AsRef<str>>(text: &'t str, patterns: &[S]) -> Result<Vec<&'t str>> {
    let regexes = patterns
        .iter()
        .map(|p| {
            let p = p.as_ref();
            Regex::new(p).map_err(|source| Error::Pattern {
                pattern: p.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(text
        .lines()
        .filter(|line| regexes.iter().all(|re| re.is_match(line)))
        .collect())
}
