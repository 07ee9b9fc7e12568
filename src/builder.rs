//! The two logger construction strategies.
//!
//! Both produce a [`Logger`] emitting the same JSON record shape; they differ
//! only in where records land:
//!
//! - [`build_basic`]: console plus optional plain files, no rotation.
//! - [`build_rotating`]: console plus a size-rotated primary file.
//!
//! The strategy is chosen by the caller, not by the options; the
//! [`production_logger`] and [`default_logger`] wrappers pair each preset
//! with its intended strategy.

use crate::config::LogOptions;
use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::writer::{console_sink, file_sink, RotatingFileWriter, Sink, SinkSet};

/// Builds a logger over plain, non-rotating sinks.
///
/// All records go to stdout and, when `log_file` is set, to that file.
/// Error-and-above records are additionally appended to `err_log_file` when
/// it is set. Either path failing to open is a configuration error.
pub fn build_basic(opts: &LogOptions) -> Result<Logger> {
    let mut primary: Vec<Sink> = vec![console_sink()];
    if let Some(path) = &opts.log_file {
        primary.push(file_sink(path)?);
    }

    let mut error: Vec<Sink> = Vec::new();
    if let Some(path) = &opts.err_log_file {
        error.push(file_sink(path)?);
    }

    Ok(Logger::from_parts(opts, SinkSet { primary, error }))
}

/// Builds a logger whose file output is size-rotated.
///
/// All records go to stdout and to the rotating file at `log_file`, which is
/// rotated per the options' size/age/backup thresholds.
///
/// `err_log_file` must be set and is validated, but records of every level go
/// to the single rotating sink; no separate error sink is created. This
/// mirrors the long-standing behavior of the deployments this crate replaces
/// and is kept until the routing is decided as a product matter.
pub fn build_rotating(opts: &LogOptions) -> Result<Logger> {
    let log_file = match (&opts.log_file, &opts.err_log_file) {
        (Some(log_file), Some(_)) => log_file,
        _ => {
            return Err(Error::Config(
                "log_file and err_log_file must both be set".to_string(),
            ))
        }
    };

    let rotating = RotatingFileWriter::new(log_file, opts.rotation_policy())?;
    let primary: Vec<Sink> = vec![console_sink(), Box::new(rotating)];

    Ok(Logger::from_parts(
        opts,
        SinkSet {
            primary,
            error: Vec::new(),
        },
    ))
}

/// Rotating strategy over the production preset.
pub fn production_logger(app_name: &str) -> Result<Logger> {
    build_rotating(&LogOptions::production(app_name))
}

/// Basic strategy over the default preset.
pub fn default_logger(app_name: &str) -> Result<Logger> {
    build_basic(&LogOptions::default_for(app_name))
}
