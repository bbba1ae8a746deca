//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Tag written between the brackets of a log line.
    ///
    /// `Error` is intentionally mixed-case ("Error", not "ERROR"); existing log
    /// consumers match on it.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Parse a level name, falling back to `Debug` for anything unrecognized.
    ///
    /// Matching is case-insensitive against `debug`, `info`, `warn`, `error` and
    /// `fatal`. The empty string also yields `Debug`.
    ///
    /// ```
    /// use leveled_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse_lossy("WARN"), LogLevel::Warning);
    /// assert_eq!(LogLevel::parse_lossy("verbose"), LogLevel::Debug);
    /// ```
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(LogLevel::Debug)
    }

    /// Map a numeric level back to a `LogLevel`; unknown values become `Debug`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            3 => LogLevel::Error,
            4 => LogLevel::Fatal,
            _ => LogLevel::Debug,
        }
    }

    /// Levels that are mirrored to the error file.
    pub fn is_error_class(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Fatal)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

/// Level tag for a raw numeric level; unknown values fall back to "DEBUG".
pub fn level_name_of(value: u8) -> &'static str {
    LogLevel::from_u8(value).as_str()
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warning.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "Error");
        assert_eq!(LogLevel::Fatal.as_str(), "FATAL");
        assert_eq!(LogLevel::Error.to_string(), "Error");
    }

    #[test]
    fn test_unknown_numeric_level() {
        assert_eq!(level_name_of(2), "WARN");
        assert_eq!(level_name_of(5), "DEBUG");
        assert_eq!(level_name_of(u8::MAX), "DEBUG");
        assert_eq!(LogLevel::from_u8(42), LogLevel::Debug);
    }

    #[test]
    fn test_parse_lossy() {
        assert_eq!(LogLevel::parse_lossy("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::parse_lossy("Info"), LogLevel::Info);
        assert_eq!(LogLevel::parse_lossy("wArN"), LogLevel::Warning);
        assert_eq!(LogLevel::parse_lossy("ERROR"), LogLevel::Error);
        assert_eq!(LogLevel::parse_lossy("fatal"), LogLevel::Fatal);

        assert_eq!(LogLevel::parse_lossy(""), LogLevel::Debug);
        assert_eq!(LogLevel::parse_lossy("warning"), LogLevel::Debug);
        assert_eq!(LogLevel::parse_lossy(" info"), LogLevel::Debug);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "trace".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref s) if s == "trace"));
        assert_eq!("Fatal".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
    }

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_error_class() {
        assert!(!LogLevel::Warning.is_error_class());
        assert!(LogLevel::Error.is_error_class());
        assert!(LogLevel::Fatal.is_error_class());
    }
}
