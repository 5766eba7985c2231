//! The common **abstraction** for permutation rules.
//!
//! Every rule reads the targets plus its own word source from a
//! [`RuleContext`] and pushes candidates into a write-only `emit` callback.
//! Rules never mutate targets, word sources or configuration, which keeps
//! each of them testable on its own.
//!
//! Available rules:
//! * [`Append`]: attaches words after a target's first structural split point.
//! * [`Prepend`]: attaches words in front of a target.
//! * [`SetSubstitution`]: swaps a label found in the substitution set for other set words.
//! * [`ExtensionSubstitution`]: swaps the extension of a target.
//! * [`RangeExpansion`]: walks numeric labels over a window of integers.

use dnscewl_common::{Config, WordSources};

mod append;
mod expansion;
mod extension;
mod prepend;
mod substitution;

pub use append::Append;
pub use expansion::RangeExpansion;
pub use extension::ExtensionSubstitution;
pub use prepend::Prepend;
pub use substitution::SetSubstitution;

/// Immutable view of a run handed to every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub sources: &'a WordSources,
    pub config: &'a Config,
}

impl<'a> RuleContext<'a> {
    pub fn new(sources: &'a WordSources, config: &'a Config) -> Self {
        Self { sources, config }
    }
}

pub trait PermutationRule {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Generates candidates in target-major, word-minor order.
    fn apply(&self, ctx: &RuleContext<'_>, emit: &mut dyn FnMut(String));
}

#[cfg(test)]
pub(crate) fn collect(rule: &dyn PermutationRule, sources: &WordSources, config: &Config) -> Vec<String> {
    let mut out = Vec::new();
    rule.apply(&RuleContext::new(sources, config), &mut |c| out.push(c));
    out
}
