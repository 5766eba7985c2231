use dnscewl_common::domain::labels::LABEL_DELIMITER;
use tracing::debug;

use super::{PermutationRule, RuleContext};

/// Replaces everything from the last `.` of a target with each extension
/// string, e.g. `example.com` with `.org` gives `example.org`.
///
/// Extension strings are used verbatim, so they normally carry their own
/// leading dot. Targets without a dot are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionSubstitution;

impl PermutationRule for ExtensionSubstitution {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn apply(&self, ctx: &RuleContext<'_>, emit: &mut dyn FnMut(String)) {
        for target in &ctx.sources.targets {
            let Some(location) = target.rfind(LABEL_DELIMITER) else {
                debug!("No extension in {target}, skipping");
                continue;
            };
            let stem = &target[..location];
            for extension in &ctx.sources.extensions {
                emit(format!("{stem}{extension}"));
            }
        }
    }
}
