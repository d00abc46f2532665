//! crates/pidlog/src/level.rs
//! Severity levels and the built-in tag constants.

use std::fmt;
use std::str::FromStr;

/// Tag rendered for error lines. The red escape and its reset are baked into
/// the tag text so the tag keeps its color on every emission path.
pub const ERROR_TAG: &str = "\x1b[31m ERROR \x1b[0m";

/// Tag rendered for info lines, yellow baked in like [`ERROR_TAG`].
pub const INFO_TAG: &str = "\x1b[33m  INFO \x1b[0m";

/// Tag rendered for debug lines. Carries no embedded color, so it picks up
/// the process-derived auto color when that mode is enabled.
pub const DEBUG_TAG: &str = " DEBUG ";

/// Ordered severity classification for a diagnostic message.
///
/// A message at level `L` is emitted iff the configured threshold `T`
/// satisfies `T >= L`; the derived [`Ord`] expresses the gating law directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Suppress everything.
    None = 0,
    /// Errors only.
    Error = 1,
    /// Errors and informational messages.
    Info = 2,
    /// Everything, including debug output.
    Debug = 3,
}

impl Level {
    /// Returns the built-in tag text for this level, or `None` for
    /// [`Level::None`], which never labels a message.
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Error => Some(ERROR_TAG),
            Self::Info => Some(INFO_TAG),
            Self::Debug => Some(DEBUG_TAG),
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Error,
            2 => Self::Info,
            // Out-of-range values fall back to logging everything.
            _ => Self::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLevelError;

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized log level; expected none, error, info, or debug")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else {
            Err(ParseLevelError)
        }
    }
}
