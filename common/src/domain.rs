//! # Domain Models
//!
//! * [`labels`]: splitting targets into labels, repeat detection and the
//!   first-occurrence replace helper every substituting rule goes through.
//! * [`range::RangeSpec`]: the parsed `--range` value.
//! * [`sources::WordSources`]: targets and word collections of a run.

pub mod labels;
pub mod range;
pub mod sources;
