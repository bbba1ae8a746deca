//! File logging example
//!
//! Writes to `./logs/application.log` and mirrors Error/Fatal lines to
//! `./logs/application.log.err`. A small rotation threshold shows backups
//! being created.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;
use leveled_logger::{error, info, warn};

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    std::fs::create_dir_all("logs")?;
    let config = FileLoggerConfig::new().with_max_file_size(4 * 1024);
    let logger = FileAppender::with_config("info", "application.log", "logs", config)?;

    logger.debug(format_args!("Loading configuration..."))?;
    info!(logger, "Application started")?;
    warn!(logger, "Using default settings for some options")?;
    error!(logger, "Failed to load optional plugin")?;

    for i in 1..=200 {
        info!(logger, "Processing item {}/200", i)?;
        if i == 150 {
            warn!(logger, "Item {} took longer than expected", i)?;
        }
    }

    logger.close()?;

    println!("Check '{}' and '{}'", logger.path().display(), logger.error_path().display());
    println!("Rotated backups end with '.back'");

    Ok(())
}
