//! src/levels.rs
//! Ordered severity levels controlling message filtering.

use std::fmt;
use std::str::FromStr;

/// Severity of a diagnostic message.
///
/// Levels are totally ordered from [`Level::Debug`] (lowest) to
/// [`Level::Fatal`] (highest); a message is eligible for emission when its
/// level is at or above the configured threshold. The error channel is exempt
/// from threshold filtering entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Verbose diagnostics, subject to the secondary debug gate.
    Debug = 0,
    /// Routine operational messages.
    Info = 1,
    /// Conditions worth attention that do not indicate failure.
    Warn = 2,
    /// Failures; always emitted and eligible for crash-report forwarding.
    Error = 3,
    /// Unrecoverable failures; treated like [`Level::Error`] on the wire.
    Fatal = 4,
}

impl Level {
    /// Numeric severity, `0` for debug through `4` for fatal.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric severity back into a [`Level`].
    ///
    /// Returns `None` for values outside `0..=4`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Lowercase name of the level, as printed by [`fmt::Display`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized log level `{name}`")]
pub struct ParseLevelError {
    name: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level from its name, case-insensitively.
    ///
    /// `"warning"` is accepted as an alias for [`Level::Warn`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn numeric_round_trip() {
        for value in 0..=4 {
            let level = Level::from_u8(value).expect("value in range");
            assert_eq!(level.as_u8(), value);
        }
        assert_eq!(Level::from_u8(5), None);
        assert_eq!(Level::from_u8(255), None);
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("Info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("fatal".parse::<Level>(), Ok(Level::Fatal));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized log level `verbose`");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(format!("{}", Level::Debug), Level::Debug.as_str());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Level::Warn).expect("serialize");
        let level: Level = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(level, Level::Warn);
    }
}
