use std::str::FromStr;

use crate::domain::range::RangeSpec;

/// How many variant forms the append/prepend rules emit, and whether range
/// expansion runs without an explicit `--range`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    #[default]
    Zero,
    /// Drops the `.` append form and the `-` prepend form.
    One,
    /// Like [`Level::Zero`], and always runs range expansion.
    Two,
}

impl Level {
    /// Both the dot-append and hyphen-prepend forms are emitted at every
    /// level except [`Level::One`].
    pub fn emits_extra_forms(self) -> bool {
        self != Level::One
    }
}

impl TryFrom<u8> for Level {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Zero),
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            other => Err(other),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.trim().parse().map_err(|_| format!("invalid level: {s}"))?;
        Level::try_from(value).map_err(|v| format!("level must be 0, 1 or 2, got {v}"))
    }
}

/// Run configuration, set once before generation and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub level: Level,
    /// `None` when no `--range` was supplied; the window then defaults to `±100`.
    pub range: Option<RangeSpec>,
    /// Lets set substitution emit a label replaced by itself.
    pub include_original: bool,
    /// Only print candidates with at least three labels.
    pub subs_only: bool,
    /// Do not print candidates with two identical labels.
    pub no_repeats: bool,
    /// Accepted but not enforced yet.
    pub limit: Option<usize>,
}

impl Config {
    pub fn range_spec(&self) -> RangeSpec {
        self.range.unwrap_or_default()
    }

    /// Range expansion runs at level 2, or whenever a range was supplied.
    pub fn wants_range_expansion(&self) -> bool {
        self.level == Level::Two || self.range.is_some()
    }
}
