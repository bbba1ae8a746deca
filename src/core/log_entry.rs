//! Log entry structure and line rendering

use super::caller::CallerInfo;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::fmt;

/// Timestamp layout of every log line: local time with milliseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub caller: CallerInfo,
}

impl LogEntry {
    pub fn new(level: LogLevel, caller: CallerInfo, args: fmt::Arguments<'_>) -> Self {
        let message = match args.as_str() {
            Some(s) => s.to_string(),
            None => args.to_string(),
        };
        Self {
            level,
            message,
            timestamp: Local::now(),
            caller,
        }
    }

    /// Replace the capture time, e.g. when replaying entries recorded elsewhere.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Message with newlines, carriage returns and tabs replaced by escape
    /// sequences, so it cannot forge extra log lines.
    pub fn escaped_message(&self) -> Cow<'_, str> {
        if !self.message.contains(['\n', '\r', '\t']) {
            return Cow::Borrowed(&self.message);
        }
        Cow::Owned(
            self.message
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t"),
        )
    }

    /// Render as `[timestamp][file:line][function][LEVEL]message`, no newline.
    /// The message is written exactly as formatted.
    pub fn format_line(&self) -> String {
        self.format_with(self.level.as_str(), false)
    }

    /// Same as [`format_line`](Self::format_line) with the message escaped.
    pub fn format_line_escaped(&self) -> String {
        self.format_with(self.level.as_str(), true)
    }

    pub(crate) fn format_with(&self, level_tag: &str, escape: bool) -> String {
        let message = if escape {
            self.escaped_message()
        } else {
            Cow::Borrowed(self.message.as_str())
        };
        format!(
            "[{}][{}:{}][{}][{}]{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.caller.file,
            self.caller.line,
            self.caller.function,
            level_tag,
            message
        )
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_line())
    }
}
