//! Size-rotated file appender with a separate error stream
//!
//! Every entry goes to `<directory>/<file_name>`. Error and Fatal entries are
//! also written to `<directory>/<file_name>.err`. Before each write the target
//! file is stat'ed; once it has reached the configured size it is renamed to
//! `<path>_<unixSeconds>.back` and a fresh file is opened at the original path.

use crate::core::{FileLoggerConfig, LogEntry, LogLevel, Logger, LoggerError, Result};
use chrono::Utc;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One rotating output: the path it lives at and its open handle.
///
/// `file` is `None` once closed, or after a rotation that could not reopen
/// the path.
#[derive(Debug)]
struct LogStream {
    path: PathBuf,
    file: Option<File>,
}

impl LogStream {
    fn open(path: PathBuf, config: &FileLoggerConfig) -> Result<Self> {
        let file = open_log_file(&path, config).map_err(|e| {
            LoggerError::file_appender(path.display().to_string(), format!("Failed to open: {}", e))
        })?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    fn should_rotate(&self, file: &File, max_file_size: u64) -> Result<bool> {
        let metadata = file.metadata().map_err(|e| {
            LoggerError::file_appender(
                self.path.display().to_string(),
                format!("Cannot access file metadata: {}", e),
            )
        })?;
        Ok(metadata.len() >= max_file_size)
    }

    /// Rotate if the file has reached the threshold, then append `line`.
    fn write_line(&mut self, line: &[u8], config: &FileLoggerConfig) -> Result<()> {
        let file = self.file.as_ref().ok_or(LoggerError::LoggerClosed)?;
        if self.should_rotate(file, config.max_file_size)? {
            self.rotate(config)?;
        }

        let file = self.file.as_mut().ok_or(LoggerError::LoggerClosed)?;
        file.write_all(line).map_err(|e| {
            LoggerError::file_appender(
                self.path.display().to_string(),
                format!("Failed to write log entry: {}", e),
            )
        })
    }

    /// Close, rename to a timestamped backup, reopen at the original path.
    fn rotate(&mut self, config: &FileLoggerConfig) -> Result<()> {
        // Dropping the handle closes it before the rename
        drop(self.file.take());

        let backup = backup_path(&self.path, Utc::now().timestamp(), &config.backup_suffix);
        let renamed = fs::rename(&self.path, &backup).map_err(|e| {
            LoggerError::file_rotation(
                self.path.display().to_string(),
                format!("Failed to rename to '{}': {}", backup.display(), e),
            )
        });

        let file = open_log_file(&self.path, config).map_err(|e| {
            LoggerError::file_rotation(
                self.path.display().to_string(),
                format!("Failed to create new log file: {}", e),
            )
        })?;
        self.file = Some(file);

        renamed
    }

    fn close(&mut self) -> Result<()> {
        if let Some(file) = self.file.take() {
            file.sync_all().map_err(|e| {
                LoggerError::io_operation(
                    "closing log file",
                    format!("Failed to sync '{}'", self.path.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Streams {
    primary: LogStream,
    error: LogStream,
}

/// File sink writing a primary log and an Error/Fatal-only mirror.
///
/// Writes and rotations are serialized by an internal mutex, so one instance
/// can be shared across threads (for example behind an `Arc`).
///
/// # Examples
///
/// ```no_run
/// use leveled_logger::{FileAppender, Logger};
///
/// let appender = FileAppender::new("warn", "app.log", "/var/log/myapp").unwrap();
/// appender.warn(format_args!("disk usage at {}%", 91)).unwrap();
/// appender.close().unwrap();
/// ```
#[derive(Debug)]
pub struct FileAppender {
    min_level: LogLevel,
    file_name: String,
    directory: PathBuf,
    config: FileLoggerConfig,
    streams: Mutex<Streams>,
}

impl FileAppender {
    /// Open `<directory>/<file_name>` and its `.err` companion with default settings.
    ///
    /// `level` is parsed leniently (unknown → debug).
    ///
    /// # Errors
    ///
    /// Returns error if either file cannot be opened. The directory is not created.
    pub fn new(level: &str, file_name: &str, directory: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(level, file_name, directory, FileLoggerConfig::default())
    }

    /// Same as [`new`](Self::new) with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns error if `config` is invalid or either file cannot be opened
    pub fn with_config(
        level: &str,
        file_name: &str,
        directory: impl AsRef<Path>,
        config: FileLoggerConfig,
    ) -> Result<Self> {
        config.validate()?;
        if file_name.is_empty() {
            return Err(LoggerError::config("FileAppender", "file name must not be empty"));
        }

        let directory = directory.as_ref().to_path_buf();
        let primary_path = directory.join(file_name);
        let error_path = directory.join(format!("{}{}", file_name, config.error_suffix));

        let primary = LogStream::open(primary_path, &config)?;
        let error = LogStream::open(error_path, &config)?;

        Ok(Self {
            min_level: LogLevel::parse_lossy(level),
            file_name: file_name.to_string(),
            directory,
            config,
            streams: Mutex::new(Streams { primary, error }),
        })
    }

    /// Path of the primary log file
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Path of the Error/Fatal mirror
    #[must_use]
    pub fn error_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}{}", self.file_name, self.config.error_suffix))
    }

    /// Directory holding the log, its mirror and all backups
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn config(&self) -> &FileLoggerConfig {
        &self.config
    }

    /// True once [`close`](Logger::close) ran or a rotation left a stream unusable.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let streams = self.streams.lock();
        streams.primary.file.is_none() || streams.error.file.is_none()
    }
}

impl Logger for FileAppender {
    fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        let mut line = if self.config.escape_control_chars {
            entry.format_line_escaped()
        } else {
            entry.format_line()
        };
        line.push('\n');

        let mut streams = self.streams.lock();
        streams.primary.write_line(line.as_bytes(), &self.config)?;
        if entry.level.is_error_class() {
            streams.error.write_line(line.as_bytes(), &self.config)?;
        }
        Ok(())
    }

    /// Release both handles. Later writes fail with `LoggerClosed`.
    fn close(&self) -> Result<()> {
        let mut streams = self.streams.lock();
        let primary = streams.primary.close();
        let error = streams.error.close();
        primary.and(error)
    }

    fn name(&self) -> &str {
        "file"
    }
}

fn open_log_file(path: &Path, config: &FileLoggerConfig) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(config.file_mode);
    }
    #[cfg(not(unix))]
    let _ = config;
    options.open(path)
}

/// `<path>_<timestamp><suffix>`, or `<path>_<timestamp>.<n><suffix>` when that
/// name is already taken by an earlier rotation in the same second.
///
/// The no-overwrite guarantee holds for one sink instance only: the check and
/// the later rename are serialized by that sink's mutex, not against other
/// processes or other sinks on the same path.
fn backup_path(path: &Path, timestamp: i64, suffix: &str) -> PathBuf {
    let base = path.as_os_str().to_string_lossy();
    let candidate = PathBuf::from(format!("{}_{}{}", base, timestamp, suffix));
    if !candidate.exists() {
        return candidate;
    }

    let mut n = 1u32;
    loop {
        let candidate = PathBuf::from(format!("{}_{}.{}{}", base, timestamp, n, suffix));
        if !candidate.exists() {
            eprintln!(
                "[WARN] Backup for '{}' already exists for second {}; using '{}'",
                path.display(),
                timestamp,
                candidate.display()
            );
            return candidate;
        }
        n += 1;
    }
}
