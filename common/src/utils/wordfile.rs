//! Plain-text word files: one word or target per line, no quoting or escaping.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

/// Reads every line of `reader` verbatim, minus the line terminator.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Reads a word file. A file that cannot be read, or that holds no lines,
/// is a fatal configuration error.
pub fn read_wordlist(path: &Path) -> Result<Vec<String>, ConfigError> {
    debug!("Reading words from {}", path.display());

    let file = File::open(path).map_err(|e| ConfigError::unreadable(path, e))?;
    let words = read_lines(BufReader::new(file)).map_err(|e| ConfigError::unreadable(path, e))?;

    if words.is_empty() {
        return Err(ConfigError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    debug!("Successfully read {} words from {}", words.len(), path.display());
    Ok(words)
}
