//! # Generation Engine
//!
//! Decides which rules run for a given set of word sources and drives them,
//! in order, into an [`OutputSink`].
//!
//! Order:
//! 1. [`Append`] when append words were supplied, otherwise [`Prepend`].
//!    The two never both run.
//! 2. [`SetSubstitution`] when substitution words were supplied.
//! 3. [`ExtensionSubstitution`] when extensions were supplied.
//! 4. [`RangeExpansion`] at level 2 or when a range was supplied.

use std::io::Write;

use dnscewl_common::{Config, WordSources};
use tracing::{debug, warn};

use crate::rules::{
    Append, ExtensionSubstitution, PermutationRule, Prepend, RangeExpansion, RuleContext,
    SetSubstitution,
};
use crate::sink::{Filters, OutputSink, RunReport, SinkError};

/// Selects the rules to run, in execution order.
pub fn plan(sources: &WordSources, cfg: &Config) -> Vec<Box<dyn PermutationRule>> {
    let mut rules: Vec<Box<dyn PermutationRule>> = Vec::new();

    if !sources.append.is_empty() {
        if !sources.prepend.is_empty() {
            warn!("Both append and prepend words supplied, prepend words are ignored");
        }
        rules.push(Box::new(Append));
    } else {
        rules.push(Box::new(Prepend));
    }
    if !sources.set.is_empty() {
        rules.push(Box::new(SetSubstitution));
    }
    if !sources.extensions.is_empty() {
        rules.push(Box::new(ExtensionSubstitution));
    }
    if cfg.wants_range_expansion() {
        rules.push(Box::new(RangeExpansion));
    }
    rules
}

/// Runs every planned rule, pushing candidates through `sink`.
pub fn run<W: Write>(sources: &WordSources, cfg: &Config, sink: &mut OutputSink<W>) {
    let ctx = RuleContext::new(sources, cfg);
    debug!(level = ?cfg.level, "Generation level");

    for rule in plan(sources, cfg) {
        debug!("Processing {} rule.", rule.name());
        rule.apply(&ctx, &mut |candidate| sink.emit(candidate));
    }
}

/// Generates the full wordlist for `sources` into `writer`.
pub fn generate<W: Write>(
    sources: &WordSources,
    cfg: &Config,
    writer: W,
) -> Result<RunReport, SinkError> {
    let mut sink = OutputSink::new(writer, Filters::from_config(cfg));
    run(sources, cfg, &mut sink);
    sink.finish()
}
