use dnscewl_common::domain::labels::{LABEL_DELIMITER, count_char};
use tracing::debug;

use super::{PermutationRule, RuleContext};

/// Splits a target into `(left, right)` where `right` starts with the
/// delimiter.
///
/// Targets with two or more dots split at the first dot (`foo|.example.com`),
/// others at the last one (`example|.com`). Returns `None` without a dot.
pub fn split_point(target: &str) -> Option<(&str, &str)> {
    let location = if count_char(target, LABEL_DELIMITER) >= 2 {
        target.find(LABEL_DELIMITER)
    } else {
        target.rfind(LABEL_DELIMITER)
    }?;
    Some(target.split_at(location))
}

/// `left-word.right`, `left.word.right` and `leftword.right`.
///
/// The dotted form is left out at level 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct Append;

impl PermutationRule for Append {
    fn name(&self) -> &'static str {
        "append"
    }

    fn apply(&self, ctx: &RuleContext<'_>, emit: &mut dyn FnMut(String)) {
        let extra_forms = ctx.config.level.emits_extra_forms();

        for target in &ctx.sources.targets {
            if ctx.sources.is_excluded(target) {
                debug!("Skipping excluded target {target}");
                continue;
            }
            let Some((left, right)) = split_point(target) else {
                debug!("No split point in {target}, skipping");
                continue;
            };

            for word in &ctx.sources.append {
                emit(format!("{left}-{word}{right}"));
                if extra_forms {
                    emit(format!("{left}.{word}{right}"));
                }
                emit(format!("{left}{word}{right}"));
            }
        }
    }
}
