//! Audit logging bootstrap
//!
//! The library itself only emits through the `log` facade; initializing a
//! backend is an opt-in step for the binary (or any other host). With a log
//! directory, events go to a size-rotated file; without one, to stderr.

use anyhow::Result;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::Path;

const LOG_FILE_BASENAME: &str = "project-tracker";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Initialize the logging backend
///
/// The level is taken from `RUST_LOG` when set, defaulting to `info`.
/// The returned handle must be kept alive for the duration of the process.
///
/// # Errors
/// Fails when the log directory cannot be created or the backend cannot
/// start.
pub fn init_logging(log_dir: Option<&Path>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")?;

    let handle = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .append()
                .write_mode(WriteMode::BufferAndFlush)
                .format_for_files(flexi_logger::detailed_format)
                .start()?
        }
        None => logger.log_to_stderr().start()?,
    };

    Ok(handle)
}
