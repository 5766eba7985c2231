use dnscewl_common::domain::labels::{is_integer, labels, replace_first};
use tracing::debug;

use super::{PermutationRule, RuleContext};
use crate::range::resolve_bounds;

/// Replaces every numeric label with each integer of the window computed by
/// [`resolve_bounds`], e.g. `web.80.example.com` with `+2` gives
/// `web.80.example.com` and `web.81.example.com`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeExpansion;

impl PermutationRule for RangeExpansion {
    fn name(&self) -> &'static str {
        "range"
    }

    fn apply(&self, ctx: &RuleContext<'_>, emit: &mut dyn FnMut(String)) {
        let spec = ctx.config.range_spec();
        debug!(range = spec.value, one_sided = spec.one_sided, "Expanding numeric labels");

        for target in &ctx.sources.targets {
            for label in labels(target) {
                if !is_integer(label) {
                    continue;
                }
                // Digit runs too long for an i64 are not treated as numbers.
                let Ok(n) = label.parse::<i64>() else {
                    debug!("Numeric label {label} in {target} is out of range, skipping");
                    continue;
                };

                let (lower, upper) = resolve_bounds(n, spec.value, spec.one_sided);
                for i in lower..upper {
                    emit(replace_first(target, label, &i.to_string()));
                }
            }
        }
    }
}
