// Route-slip loading — the document index.
//
// Builds the name -> word-set mapping the rest of the pipeline runs on.
// Loading is all-or-nothing: a slip that cannot be read invalidates the
// whole ordering, so the first failure aborts with the offending name and
// no partial corpus ever escapes this module.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::words::{self, WordSet};

/// One route slip: the name it was given on input plus its vocabulary.
#[derive(Debug, Clone)]
pub struct RouteSlip {
    pub name: String,
    pub words: WordSet,
}

/// All loaded slips, in first-seen input order.
///
/// Input order matters: it is the deterministic tie-break for the greedy
/// walk, so the corpus preserves it. A name listed twice collapses to its
/// first entry.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub slips: Vec<RouteSlip>,
}

impl Corpus {
    /// Read every named slip into a corpus. Duplicate names are read once;
    /// any unreadable slip aborts the load.
    pub fn load(names: &[String]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut slips = Vec::with_capacity(names.len());
        for name in names {
            if !seen.insert(name.clone()) {
                continue;
            }
            let words = read_words(name)?;
            slips.push(RouteSlip {
                name: name.clone(),
                words,
            });
        }
        Ok(Self { slips })
    }

    pub fn len(&self) -> usize {
        self.slips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slips.is_empty()
    }
}

/// Read one slip file into its word set, line by line.
///
/// Fatal on any read failure — the error names the slip so the user knows
/// which file to fix.
pub fn read_words(name: &str) -> Result<WordSet> {
    let file =
        File::open(name).with_context(|| format!("could not open route slip {name}"))?;
    info!(slip = name, "Reading route slip");

    let mut words = WordSet::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("could not read route slip {name}"))?;
        words::scan_line(&line, &mut words);
    }

    if words.is_empty() {
        warn!(slip = name, "Route slip produced no comparable words");
    }
    Ok(words)
}

/// Read the active-rides list: one slip name per line, surrounding
/// whitespace trimmed, blank lines skipped. A missing list file is fatal,
/// same as a missing slip.
pub fn read_active_list(path: &str) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("could not open routes list {path}"))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
