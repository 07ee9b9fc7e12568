//! # Global Logging Facade
//!
//! Holds the one process-wide [`Logger`] and exposes forwarding entry points
//! so call sites never thread a logger handle around.
//!
//! ## Initialization
//!
//! Exactly one of the `init` functions should run during single-threaded
//! startup:
//!
//! - [`init`] reads the `ENV` environment variable and builds the matching
//!   preset (`"production"` → rotating info-level logger, anything else →
//!   basic debug-level logger).
//! - [`init_with`] installs a caller-built [`Logger`], the seam used by
//!   embedding applications and tests.
//!
//! Initialization is one-time and race-safe: the first successful call wins
//! and later calls return `Ok` without rebinding the singleton.
//!
//! ## Before initialization
//!
//! The per-record functions (`info`, `warn`, ...) return nothing and drop the
//! record when no logger is installed — logging is best-effort telemetry.
//! Accessors that return results ([`logger`], [`sync`]) report
//! [`Error::NotInitialized`] instead. [`fatal`] terminates the process either
//! way; termination is its contract, not a side effect of a healthy logger.

use std::env;
use std::fmt;
use std::process;

use once_cell::sync::OnceCell;

use crate::builder::{default_logger, production_logger};
use crate::config::{is_production_env, DEFAULT_APP_NAME, ENV_VAR};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::level::Level;
use crate::logger::Logger;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Builds and installs the process-wide logger from the environment.
///
/// Construction errors surface to the caller for handling (typically: print
/// to the console and abort startup). Calling again after a success is a
/// no-op returning `Ok`.
pub fn init() -> Result<()> {
    if GLOBAL.get().is_some() {
        return Ok(());
    }

    let environment = env::var(ENV_VAR).ok();
    let logger = if is_production_env(environment.as_deref()) {
        production_logger(DEFAULT_APP_NAME)?
    } else {
        default_logger(DEFAULT_APP_NAME)?
    };

    // A racing init already installed a logger; that one wins.
    let _ = GLOBAL.set(logger);
    Ok(())
}

/// Installs a caller-built logger as the process-wide singleton.
///
/// First writer wins; once a logger is installed, later calls return `Ok`
/// and the supplied logger is dropped.
pub fn init_with(logger: Logger) -> Result<()> {
    let _ = GLOBAL.set(logger);
    Ok(())
}

/// The underlying handle, for advanced use (child loggers, custom levels).
pub fn logger() -> Result<&'static Logger> {
    GLOBAL.get().ok_or(Error::NotInitialized)
}

/// Logs a message at debug level through the singleton.
#[track_caller]
pub fn debug(msg: &str, fields: &[Field]) {
    if let Some(logger) = GLOBAL.get() {
        logger.debug(msg, fields);
    }
}

/// Logs a message at info level through the singleton.
#[track_caller]
pub fn info(msg: &str, fields: &[Field]) {
    if let Some(logger) = GLOBAL.get() {
        logger.info(msg, fields);
    }
}

/// Logs a message at warn level through the singleton.
#[track_caller]
pub fn warn(msg: &str, fields: &[Field]) {
    if let Some(logger) = GLOBAL.get() {
        logger.warn(msg, fields);
    }
}

/// Logs a message at error level through the singleton.
#[track_caller]
pub fn error(msg: &str, fields: &[Field]) {
    if let Some(logger) = GLOBAL.get() {
        logger.error(msg, fields);
    }
}

/// Logs at fatal level, flushes, and terminates the process with status 1.
///
/// Terminates even when the singleton was never initialized or fatal output
/// is suppressed by the level filter.
#[track_caller]
pub fn fatal(msg: &str, fields: &[Field]) -> ! {
    match GLOBAL.get() {
        Some(logger) => logger.fatal(msg, fields),
        None => process::exit(1),
    }
}

/// Templated forwarding used by the `debugf!`/`infof!`/... macros.
#[doc(hidden)]
#[track_caller]
pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    if let Some(logger) = GLOBAL.get() {
        logger.logf(level, args);
    }
}

/// Templated forwarding used by the `fatalf!` macro.
#[doc(hidden)]
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    match GLOBAL.get() {
        Some(logger) => logger.fatalf(args),
        None => process::exit(1),
    }
}

/// Flushes any buffered output of the singleton.
///
/// Call on graceful shutdown. Errors: [`Error::NotInitialized`] before
/// `init`, [`Error::Flush`] when a sink fails to flush.
pub fn sync() -> Result<()> {
    logger()?.sync()
}
