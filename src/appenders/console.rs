//! Console appender implementation

use crate::core::{LogEntry, LogLevel, Logger, Result};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes log lines to standard output.
///
/// Owns nothing that needs releasing; `close` only flushes.
pub struct ConsoleAppender {
    min_level: LogLevel,
    use_colors: bool,
    escape: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleAppender {
    /// Create a console appender; `level` is parsed leniently (unknown → debug).
    pub fn new(level: &str) -> Self {
        Self::with_writer(LogLevel::parse_lossy(level), io::stdout())
    }

    /// Create an appender writing to `writer` instead of stdout.
    pub fn with_writer(min_level: LogLevel, writer: impl Write + Send + 'static) -> Self {
        Self {
            min_level,
            use_colors: false,
            escape: false,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Escape `\n`, `\r` and `\t` in messages. Off by default.
    #[must_use]
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Color the level tag. Off by default so lines match the file format.
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn format_text(&self, entry: &LogEntry) -> String {
        use colored::Colorize;

        if !self.use_colors {
            return entry.format_with(entry.level.as_str(), self.escape);
        }
        let tag = entry
            .level
            .as_str()
            .color(entry.level.color_code())
            .to_string();
        entry.format_with(&tag, self.escape)
    }

    #[cfg(not(feature = "console"))]
    fn format_text(&self, entry: &LogEntry) -> String {
        entry.format_with(entry.level.as_str(), self.escape)
    }
}

impl std::fmt::Debug for ConsoleAppender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleAppender")
            .field("min_level", &self.min_level)
            .field("use_colors", &self.use_colors)
            .field("escape", &self.escape)
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleAppender {
    fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        let mut line = self.format_text(entry);
        line.push('\n');
        self.writer.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Shared in-memory target so tests can inspect what was written.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_new_parses_level_leniently() {
        assert_eq!(ConsoleAppender::new("ERROR").min_level(), LogLevel::Error);
        assert_eq!(ConsoleAppender::new("nonsense").min_level(), LogLevel::Debug);
        assert_eq!(ConsoleAppender::new("").min_level(), LogLevel::Debug);
    }

    #[test]
    fn test_writes_one_line_per_call() {
        let buffer = SharedBuffer::default();
        let appender = ConsoleAppender::with_writer(LogLevel::Info, buffer.clone());

        appender.debug(format_args!("hidden")).unwrap();
        appender.info(format_args!("shown {}", 1)).unwrap();
        appender.fatal(format_args!("shown {}", 2)).unwrap();

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO]shown 1"));
        assert!(lines[1].ends_with("[FATAL]shown 2"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_line_carries_call_site() {
        let buffer = SharedBuffer::default();
        let appender = ConsoleAppender::with_writer(LogLevel::Debug, buffer.clone());

        let line = line!() + 1;
        appender.warn(format_args!("here")).unwrap();

        assert!(buffer
            .contents()
            .contains(&format!("[console.rs:{}][][WARN]here", line)));
    }

    #[test]
    fn test_message_written_verbatim_unless_escaping() {
        let buffer = SharedBuffer::default();
        let appender = ConsoleAppender::with_writer(LogLevel::Debug, buffer.clone());
        appender.warn(format_args!("a\tb")).unwrap();
        assert!(buffer.contents().ends_with("[WARN]a\tb\n"));

        let buffer = SharedBuffer::default();
        let appender =
            ConsoleAppender::with_writer(LogLevel::Debug, buffer.clone()).with_escaping(true);
        appender.warn(format_args!("a\tb\nc")).unwrap();
        assert!(buffer.contents().ends_with("[WARN]a\\tb\\nc\n"));
        assert_eq!(buffer.contents().lines().count(), 1);
    }

    #[test]
    fn test_close_is_harmless() {
        let buffer = SharedBuffer::default();
        let appender = ConsoleAppender::with_writer(LogLevel::Debug, buffer.clone());
        appender.close().unwrap();
        appender.info(format_args!("still works")).unwrap();
        assert!(buffer.contents().contains("still works"));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colored_tag_keeps_message() {
        colored::control::set_override(true);
        let buffer = SharedBuffer::default();
        let appender =
            ConsoleAppender::with_writer(LogLevel::Debug, buffer.clone()).with_colors(true);

        appender.error(format_args!("red")).unwrap();

        let output = buffer.contents();
        assert!(output.contains("\u{1b}["));
        assert!(output.trim_end().ends_with("red"));
    }
}
