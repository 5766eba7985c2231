//! # Output Sink
//!
//! The single place candidates flow through. The sink decides whether a
//! candidate is printed and always records it in the results collection:
//! filters affect console visibility only, never retention.

use std::io::{self, Write};

use dnscewl_common::Config;
use dnscewl_common::domain::labels::{LABEL_DELIMITER, count_char, has_repeated_label};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write candidates: {0}")]
    Write(#[from] io::Error),
}

/// Console filters, composed by conjunction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    /// Require at least two dots (three labels).
    pub subs_only: bool,
    /// Reject candidates with two identical labels.
    pub no_repeats: bool,
}

impl Filters {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            subs_only: cfg.subs_only,
            no_repeats: cfg.no_repeats,
        }
    }

    pub fn allows(&self, candidate: &str) -> bool {
        if self.subs_only && count_char(candidate, LABEL_DELIMITER) < 2 {
            return false;
        }
        if self.no_repeats && has_repeated_label(candidate) {
            return false;
        }
        true
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Every emitted candidate in emission order, printed or not.
    pub results: Vec<String>,
    pub printed: usize,
}

pub struct OutputSink<W: Write> {
    writer: W,
    filters: Filters,
    results: Vec<String>,
    printed: usize,
    write_error: Option<io::Error>,
}

impl<W: Write> OutputSink<W> {
    pub fn new(writer: W, filters: Filters) -> Self {
        Self {
            writer,
            filters,
            results: Vec::new(),
            printed: 0,
            write_error: None,
        }
    }

    /// Prints `candidate` on its own line when it passes the filters, then
    /// records it.
    ///
    /// After the first write failure nothing more is printed; the error is
    /// reported by [`OutputSink::finish`].
    pub fn emit(&mut self, candidate: String) {
        if self.write_error.is_none() && self.filters.allows(&candidate) {
            match writeln!(self.writer, "{candidate}") {
                Ok(()) => self.printed += 1,
                Err(e) => {
                    debug!("Stopping console output: {e}");
                    self.write_error = Some(e);
                }
            }
        }
        self.results.push(candidate);
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn printed(&self) -> usize {
        self.printed
    }

    /// Flushes the writer and hands back the results collection.
    pub fn finish(mut self) -> Result<RunReport, SinkError> {
        if let Some(e) = self.write_error.take() {
            return Err(SinkError::Write(e));
        }
        self.writer.flush()?;

        Ok(RunReport {
            results: self.results,
            printed: self.printed,
        })
    }
}
