//! # Range Specification
//!
//! Parses the user supplied `--range` string into a window description for
//! numeric label permutations.
//!
//! Supported formats:
//! * **Two-sided**: plain digits, e.g. `"5"` (window `n-5 .. n+5`).
//! * **One-sided up**: `"+5"` (window `n .. n+5`).
//! * **One-sided down**: `"-5"` (window `n-5 .. n`).
//!
//! A value of `0` selects the fixed `±100` window.

use std::str::FromStr;

use crate::domain::labels::is_integer;
use crate::error::ConfigError;

/// Parsed `--range` value: a signed offset plus whether the window only
/// extends in the direction of the sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSpec {
    pub value: i64,
    pub one_sided: bool,
}

impl RangeSpec {
    pub fn new(value: i64, one_sided: bool) -> Self {
        Self { value, one_sided }
    }
}

impl FromStr for RangeSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRange {
            input: s.to_string(),
        };

        let (digits, negative, one_sided) = match s.as_bytes().first() {
            Some(b'+') => (&s[1..], false, true),
            Some(b'-') => (&s[1..], true, true),
            _ => (s, false, false),
        };

        if !is_integer(digits) {
            return Err(invalid());
        }

        let magnitude: i64 = digits.parse().map_err(|_| invalid())?;
        let value = if negative { -magnitude } else { magnitude };

        Ok(RangeSpec::new(value, one_sided))
    }
}
