//! # Word Sources
//!
//! The immutable inputs of a generation run: the targets plus the four word
//! collections each permutation rule draws from.
//!
//! Sources are loaded fully before generation starts and are only read
//! afterwards.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSources {
    /// Domains to permute, in input order.
    pub targets: Vec<String>,
    pub append: Vec<String>,
    pub prepend: Vec<String>,
    /// Targets skipped by the append and prepend rules (exact match).
    pub exclude: BTreeSet<String>,
    /// Substitution words; iterated in sorted order.
    pub set: BTreeSet<String>,
    /// Replacement text for everything from the last `.` of a target.
    pub extensions: Vec<String>,
}

impl WordSources {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: collect(targets),
            ..Self::default()
        }
    }

    pub fn with_append<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append = collect(words);
        self
    }

    pub fn with_prepend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prepend = collect(words);
        self
    }

    pub fn with_exclude<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_set<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extensions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = collect(words);
        self
    }

    pub fn is_excluded(&self, target: &str) -> bool {
        self.exclude.contains(target)
    }
}

fn collect<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}
