//! File logger configuration

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};

/// Default rotation threshold: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default permission bits for newly created log files (unix only).
pub const DEFAULT_FILE_MODE: u32 = 0o664;

/// Settings for [`FileAppender`](crate::appenders::FileAppender).
///
/// # Examples
///
/// ```
/// use leveled_logger::FileLoggerConfig;
///
/// let config = FileLoggerConfig::new()
///     .with_max_file_size(1024 * 1024)
///     .with_file_mode(0o640);
/// assert_eq!(config.error_suffix, ".err");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    /// A file whose size is at or above this many bytes is rotated before the next write
    pub max_file_size: u64,
    /// Mode bits for created files
    pub file_mode: u32,
    /// Appended to the primary file name to form the error file name
    pub error_suffix: String,
    /// Extension of rotated backups, `<path>_<unixSeconds><backup_suffix>`
    pub backup_suffix: String,
    /// Escape `\n`, `\r` and `\t` in messages so one call is always one line.
    /// Off by default: messages are written exactly as formatted.
    pub escape_control_chars: bool,
}

impl Default for FileLoggerConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            file_mode: DEFAULT_FILE_MODE,
            error_suffix: ".err".to_string(),
            backup_suffix: ".back".to_string(),
            escape_control_chars: false,
        }
    }
}

impl FileLoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_error_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.error_suffix = suffix.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = suffix.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_escaping(mut self, enabled: bool) -> Self {
        self.escape_control_chars = enabled;
        self
    }

    /// Reject settings that would rotate on every write or make the error file
    /// collide with the primary file.
    pub fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(LoggerError::config(
                "FileLoggerConfig",
                "max_file_size must be at least 1 byte",
            ));
        }
        if self.error_suffix.is_empty() {
            return Err(LoggerError::config(
                "FileLoggerConfig",
                "error_suffix must not be empty",
            ));
        }
        if self.error_suffix.contains(['/', '\\']) || self.backup_suffix.contains(['/', '\\']) {
            return Err(LoggerError::config(
                "FileLoggerConfig",
                "suffixes must not contain path separators",
            ));
        }
        Ok(())
    }
}
