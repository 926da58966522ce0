use anyhow::Result;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::core::{Category, DependencyWalker, PathPrefixes, Traversal};
use crate::formatters::ListingFormatter;
use crate::inspectors::DependencyLister;

pub const USAGE: &str = "usage: otoolrecursive [-vprelo]  <dynlib file>";

/// Category flags in the order their sets are printed
const CATEGORY_FLAGS: [(char, Category); 5] = [
    ('p', Category::Package),
    ('r', Category::Rpath),
    ('e', Category::ExecutablePath),
    ('l', Category::LoaderPath),
    ('o', Category::Other),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("not an option or existing file: {0}")]
    InvalidArgument(String),
    #[error("no library or binary given")]
    MissingPath,
}

/// Parsed command line: single-character flags plus the artifact to inspect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    flags: Vec<char>,
    path: String,
}

impl Options {
    /// Each `-x` token is one flag (no clustering); unknown flags are kept and
    /// ignored. Any other token must be an existing path, the last one wins.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Vec::new();
        let mut path = None;

        for token in tokens {
            let token = token.as_ref();
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some('-'), Some(flag), None) => flags.push(flag),
                _ if Path::new(token).exists() => path = Some(token.to_string()),
                _ => return Err(UsageError::InvalidArgument(token.to_string())),
            }
        }

        let path = path.ok_or(UsageError::MissingPath)?;
        Ok(Self { flags, path })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    pub fn verbose(&self) -> bool {
        self.has_flag('v')
    }

    /// Requested sets in `p r e l o` order; all five when none was requested
    pub fn selected_categories(&self) -> Vec<Category> {
        let requested: Vec<Category> = CATEGORY_FLAGS
            .iter()
            .filter(|(flag, _)| self.has_flag(*flag))
            .map(|(_, category)| *category)
            .collect();

        if requested.is_empty() {
            CATEGORY_FLAGS.iter().map(|(_, category)| *category).collect()
        } else {
            requested
        }
    }
}

/// Walk `options.path()`, then print the verbose report (with `-v`) and the
/// selected sets to `out`. With `-v` every inspection command is echoed to `out`
/// first; a failed write to `out` ends the run with that error.
pub fn run<L, W>(
    options: &Options,
    lister: L,
    prefixes: PathPrefixes,
    out: &mut W,
) -> Result<Traversal>
where
    L: DependencyLister,
    W: Write,
{
    let walker = DependencyWalker::new(lister, prefixes);
    let traversal = if options.verbose() {
        walker.walk_echoing(options.path(), &mut *out)?
    } else {
        walker.walk(options.path())
    };

    let formatter = ListingFormatter::new();
    if options.verbose() {
        formatter.write_report(&traversal.categories, out)?;
    }
    formatter.write_selection(&traversal.categories, &options.selected_categories(), out)?;
    out.flush()?;

    Ok(traversal)
}
