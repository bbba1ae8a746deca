//! # Leveled Logger
//!
//! A small synchronous logging library with two interchangeable sinks.
//!
//! ## Features
//!
//! - **Leveled output**: Debug, Info, Warning, Error and Fatal with a per-sink minimum
//! - **Console sink**: one line per entry on standard output
//! - **File sink**: size-based rotation plus an Error/Fatal mirror file
//! - **Call sites**: every line carries the file, line and function that logged it
//!
//! Lines look like `[2025-01-08 10:30:45.123][main.rs:12][run][WARN]count=3`.
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::warn;
//!
//! let logger: Box<dyn Logger> = Box::new(ConsoleAppender::new("warn"));
//! warn!(logger, "count={}", 3).unwrap();
//! logger.close().unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        CallerInfo, FileLoggerConfig, LogEntry, LogLevel, Logger, LoggerError, Result,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    level_name_of, resolve_caller, CallerInfo, FileLoggerConfig, LogEntry, LogLevel, Logger,
    LoggerError, Result, DEFAULT_FILE_MODE, DEFAULT_MAX_FILE_SIZE,
};
