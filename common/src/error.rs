//! Configuration errors.
//!
//! Every variant is fatal: the binary reports it and exits before any
//! candidate is generated.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File name of words to process a set list, append or prepend to targets is needed")]
    MissingWordList,

    #[error("Can not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Please check {}, no lines read", path.display())]
    EmptyFile { path: PathBuf },

    #[error("{input} is not a valid range")]
    InvalidRange { input: String },

    #[error("No targets supplied")]
    NoTargets,
}

impl ConfigError {
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Unreadable {
            path: path.into(),
            source,
        }
    }
}
