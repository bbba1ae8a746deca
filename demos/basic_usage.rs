//! Basic console logging example
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{debug, fatal, info, warn};

fn handle_request(logger: &dyn Logger, id: u32) -> Result<()> {
    debug!(logger, "request {} received", id)?;
    if id % 3 == 0 {
        warn!(logger, "request {} is slow", id)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let logger = ConsoleAppender::new("debug");

    info!(logger, "Application started")?;
    for id in 1..=4 {
        handle_request(&logger, id)?;
    }
    logger.error(format_args!("plain method call, no function name"))?;
    fatal!(logger, "shutting down")?;

    let quiet = ConsoleAppender::new("error");
    quiet.info(format_args!("not shown"))?;

    logger.close()
}
