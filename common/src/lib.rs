//! Shared data model for `dnscewl`: run configuration, word sources, label
//! helpers and configuration errors.

pub mod config;
pub mod domain;
pub mod error;
pub mod utils;

pub use config::{Config, Level};
pub use domain::range::RangeSpec;
pub use domain::sources::WordSources;
pub use error::ConfigError;
