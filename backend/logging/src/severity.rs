//! Log Severity
//!
//! Ordered levels used for threshold filtering, plus the `Default` and `Off` sentinels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a log record.
///
/// Variants are ordered by their numeric code: `Default < Off < Debug < Info < Warning < Error`.
/// `Default` is never filtered; `Off` is the "not yet initialized" threshold and is always
/// filtered when used as a record level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Default = 0,
    Off = 1,
    Debug = 2,
    Info = 3,
    Warning = 4,
    Error = 5,
}

/// Raw level code that does not map to any [`Severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid logging level code {0}")]
pub struct InvalidSeverity(pub i64);

/// Unrecognised level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown logging level \"{0}\"")]
pub struct UnknownSeverity(pub String);

impl Severity {
    /// Levels a threshold may be set to.
    pub const THRESHOLDS: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Bare level name, without brackets or padding.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Off => "OFF",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Whether this level can be used as the filtering threshold.
    pub const fn is_valid_threshold(self) -> bool {
        matches!(
            self,
            Severity::Debug | Severity::Info | Severity::Warning | Severity::Error
        )
    }

    /// Filtering rule: a record passes unless it is less severe than the threshold,
    /// except that `Default` always passes and `Off` never does.
    pub fn passes(self, threshold: Severity) -> bool {
        match self {
            Severity::Default => true,
            Severity::Off => false,
            level => level >= threshold,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Severity::Default),
            "off" => Ok(Severity::Off),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

impl TryFrom<i64> for Severity {
    type Error = InvalidSeverity;

    fn try_from(code: i64) -> Result<Self, InvalidSeverity> {
        match code {
            0 => Ok(Severity::Default),
            1 => Ok(Severity::Off),
            2 => Ok(Severity::Debug),
            3 => Ok(Severity::Info),
            4 => Ok(Severity::Warning),
            5 => Ok(Severity::Error),
            other => Err(InvalidSeverity(other)),
        }
    }
}

impl TryFrom<i32> for Severity {
    type Error = InvalidSeverity;

    fn try_from(code: i32) -> Result<Self, InvalidSeverity> {
        Severity::try_from(i64::from(code))
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(code: u8) -> Result<Self, InvalidSeverity> {
        Severity::try_from(i64::from(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_codes() {
        assert!(Severity::Default < Severity::Off);
        assert!(Severity::Off < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn passes_iff_at_least_threshold_or_default() {
        let all = [
            Severity::Default,
            Severity::Off,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ];
        for threshold in Severity::THRESHOLDS {
            for level in all {
                let expected = level == Severity::Default
                    || (level != Severity::Off && level >= threshold);
                assert_eq!(level.passes(threshold), expected, "{level} vs {threshold}");
            }
        }
    }

    #[test]
    fn off_is_filtered_at_every_threshold() {
        for threshold in Severity::THRESHOLDS {
            assert!(!Severity::Off.passes(threshold));
        }
        // Before initialization the threshold is Off and everything else passes.
        assert!(!Severity::Off.passes(Severity::Off));
        assert!(Severity::Debug.passes(Severity::Off));
    }

    #[test]
    fn only_real_levels_are_thresholds() {
        assert!(!Severity::Default.is_valid_threshold());
        assert!(!Severity::Off.is_valid_threshold());
        assert!(Severity::Debug.is_valid_threshold());
        assert!(Severity::Error.is_valid_threshold());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" error ".parse::<Severity>().unwrap(), Severity::Error);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn rejects_out_of_range_codes() {
        assert_eq!(Severity::try_from(3u8), Ok(Severity::Info));
        assert_eq!(Severity::try_from(6i32), Err(InvalidSeverity(6)));
        assert_eq!(Severity::try_from(-1i32), Err(InvalidSeverity(-1)));
    }
}
