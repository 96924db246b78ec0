//! Diagnostics bootstrap for the command line.
//!
//! The library only emits `log` records; the binary decides where they go.
//! `RUST_LOG` takes precedence over the level passed in.

use flexi_logger::{Logger, LoggerHandle};

use crate::error::Result;

/// Start logging to stderr at `level` (e.g. `"info"`, `"debug"`).
///
/// Keep the returned handle alive for as long as records should be written.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
