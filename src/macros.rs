//! Logging macros with `format!`-style arguments.
//!
//! Unlike the [`Logger`](crate::Logger) methods, the macros also record the
//! name of the enclosing function. Each macro evaluates to the
//! [`Result`](crate::Result) of the write.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let logger = ConsoleAppender::new("debug");
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = ConsoleAppender::new("debug");
/// use leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Logger::log(
            &$logger,
            $level,
            $crate::CallerInfo::new(::std::file!(), ::std::line!(), $crate::function_name!()),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Log a debug-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = ConsoleAppender::new("debug");
/// use leveled_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = ConsoleAppender::new("debug");
/// use leveled_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message. File sinks mirror it to the error file.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. File sinks mirror it to the error file.
///
/// Only writes; it does not terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
