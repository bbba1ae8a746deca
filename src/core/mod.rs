//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;

pub use caller::{resolve_caller, CallerInfo};
pub use config::{FileLoggerConfig, DEFAULT_FILE_MODE, DEFAULT_MAX_FILE_SIZE};
pub use error::{LoggerError, Result};
pub use log_entry::{LogEntry, TIMESTAMP_FORMAT};
pub use log_level::{level_name_of, LogLevel};
pub use logger::Logger;
