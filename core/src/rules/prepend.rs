use tracing::debug;

use super::{PermutationRule, RuleContext};

/// `wordtarget`, `word-target` and `word.target`; the hyphenated form is
/// left out at level 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct Prepend;

impl PermutationRule for Prepend {
    fn name(&self) -> &'static str {
        "prepend"
    }

    fn apply(&self, ctx: &RuleContext<'_>, emit: &mut dyn FnMut(String)) {
        let extra_forms = ctx.config.level.emits_extra_forms();

        for target in &ctx.sources.targets {
            if ctx.sources.is_excluded(target) {
                debug!("Skipping excluded target {target}");
                continue;
            }
            for word in &ctx.sources.prepend {
                emit(format!("{word}{target}"));
                if extra_forms {
                    emit(format!("{word}-{target}"));
                }
                emit(format!("{word}.{target}"));
            }
        }
    }
}
