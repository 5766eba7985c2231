//! The `dnscewl` permutation engine.
//!
//! * [`rules`]: the permutation rules and their common trait.
//! * [`range`]: window computation for numeric labels.
//! * [`sink`]: console filtering and the results collection.
//! * [`engine`]: rule selection and ordering.

pub mod engine;
pub mod range;
pub mod rules;
pub mod sink;

pub use engine::generate;
pub use sink::{Filters, OutputSink, RunReport, SinkError};
