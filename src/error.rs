//! Error types for logger construction and the global facade.

use std::io;

use thiserror::Error as ThisError;

/// Everything that can go wrong while building or flushing a logger.
///
/// Per-record logging calls never return errors; write failures are swallowed
/// as best-effort telemetry. Only construction (`Config`), facade access
/// before initialization (`NotInitialized`) and explicit flushing (`Flush`)
/// surface errors to the caller.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid or incomplete options, an unwritable output path, or a
    /// malformed level string.
    #[error("invalid logging configuration: {0}")]
    Config(String),

    /// A facade accessor was used before `init()` succeeded.
    #[error("logger used before init() succeeded")]
    NotInitialized,

    /// `sync()` failed to flush one or more sinks.
    #[error("failed to flush log sinks: {0}")]
    Flush(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
