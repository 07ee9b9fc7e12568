//! # applog
//!
//! Process-wide structured logging: one JSON record per line, console + file
//! output, environment-selected presets, and size-based file rotation for
//! production.
//!
//! ## Quick start
//!
//! ```no_run
//! use applog::field;
//!
//! fn main() -> applog::Result<()> {
//!     // ENV=production selects the rotating info-level preset; anything
//!     // else selects the basic debug-level preset.
//!     applog::init()?;
//!
//!     applog::info("started", &[field("port", 8080)]);
//!     applog::infof!("cache warmed in {} ms", 41);
//!
//!     applog::sync()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Record shape
//!
//! Every record is one JSON object per line with `time` (ISO-8601), `level`
//! (lowercase), `caller` (`file:line` of the call site), `msg`, a fixed `APP`
//! field carrying the application name, any structured fields passed at the
//! call site, a `logger` name when set, and a `stacktrace` for warn-and-above
//! in development mode.
//!
//! ## Embedding and tests
//!
//! Applications that want explicit construction instead of the environment
//! presets build a [`Logger`] through [`build_basic`] / [`build_rotating`]
//! and either pass it around directly or install it with
//! [`global::init_with`].

pub mod builder;
pub mod config;
pub mod error;
pub mod field;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
mod record;
pub mod rotation;
mod writer;

pub use builder::{build_basic, build_rotating, default_logger, production_logger};
pub use config::LogOptions;
pub use error::{Error, Result};
pub use field::{duration_field, field, Field};
pub use global::{debug, error, fatal, info, init, init_with, logger as get_logger, sync, warn};
pub use level::Level;
pub use logger::Logger;
pub use rotation::RotationPolicy;
pub use writer::RotatingFileWriter;
