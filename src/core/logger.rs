//! The logging capability shared by every sink

use super::{
    caller::{resolve_caller, CallerInfo},
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use std::fmt;
use std::sync::Arc;

/// Leveled logging operations plus resource release.
///
/// Sinks implement [`min_level`](Logger::min_level),
/// [`write_entry`](Logger::write_entry), [`close`](Logger::close) and
/// [`name`](Logger::name); the leveled methods are provided. Code that only
/// needs to log should take `&dyn Logger` (or `Box<dyn Logger>`) so the console
/// and file sinks are interchangeable.
///
/// The leveled methods are `#[track_caller]`: the reported file and line are
/// those of the method call. They carry no function name; use the
/// [`info!`](crate::info) family of macros to record it as well.
///
/// # Examples
///
/// ```
/// use leveled_logger::{ConsoleAppender, Logger};
///
/// fn run(logger: &dyn Logger) -> leveled_logger::Result<()> {
///     logger.info(format_args!("processing {} items", 3))?;
///     Ok(())
/// }
///
/// run(&ConsoleAppender::new("info")).unwrap();
/// ```
pub trait Logger: Send + Sync {
    /// Lowest level this sink emits.
    fn min_level(&self) -> LogLevel;

    /// Write an entry that already passed the level gate.
    fn write_entry(&self, entry: &LogEntry) -> Result<()>;

    /// Release owned resources. Writes after `close` fail with
    /// [`LoggerError::LoggerClosed`](crate::LoggerError::LoggerClosed) where the
    /// sink owns anything to release.
    fn close(&self) -> Result<()>;

    fn name(&self) -> &str;

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    /// Gate on `level`, format `args` and write. Nothing is formatted for
    /// disabled levels.
    fn log(&self, level: LogLevel, caller: CallerInfo, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.write_entry(&LogEntry::new(level, caller, args))
    }

    #[track_caller]
    fn debug(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Debug, resolve_caller(), args)
    }

    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Info, resolve_caller(), args)
    }

    #[track_caller]
    fn warn(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Warning, resolve_caller(), args)
    }

    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Error, resolve_caller(), args)
    }

    #[track_caller]
    fn fatal(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Fatal, resolve_caller(), args)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn min_level(&self) -> LogLevel {
        (**self).min_level()
    }

    fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        (**self).write_entry(entry)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn min_level(&self) -> LogLevel {
        (**self).min_level()
    }

    fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        (**self).write_entry(entry)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn min_level(&self) -> LogLevel {
        (**self).min_level()
    }

    fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        (**self).write_entry(entry)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
