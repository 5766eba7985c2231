use dnscewl_common::domain::labels::{labels, replace_first};

use super::{PermutationRule, RuleContext};

/// Replaces a label that belongs to the substitution set with every other
/// word of the set (and with itself when `include_original` is set).
///
/// Only the first textual occurrence of the label is replaced, see
/// [`replace_first`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SetSubstitution;

impl PermutationRule for SetSubstitution {
    fn name(&self) -> &'static str {
        "set"
    }

    fn apply(&self, ctx: &RuleContext<'_>, emit: &mut dyn FnMut(String)) {
        let set = &ctx.sources.set;
        let include_original = ctx.config.include_original;

        for target in &ctx.sources.targets {
            for label in labels(target) {
                if !set.contains(label) {
                    continue;
                }
                for word in set {
                    if word != label || include_original {
                        emit(replace_first(target, label, word));
                    }
                }
            }
        }
    }
}
