//! # Logging Configuration
//!
//! This module defines [`LogOptions`], the immutable value object consumed by
//! the two construction strategies in [`crate::builder`], plus the named
//! presets the global facade chooses between at startup.
//!
//! ## Presets
//!
//! - [`LogOptions::production`]: info minimum, rotation limits enabled.
//!   Paired with [`crate::builder::build_rotating`].
//! - [`LogOptions::default_for`]: debug minimum, rotation limits unused.
//!   Paired with [`crate::builder::build_basic`].
//!
//! Which preset the facade picks is driven by the `ENV` environment variable:
//! exactly `"production"` selects the production preset, anything else
//! (including unset) selects the default preset.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::rotation::RotationPolicy;

/// Environment variable consulted by `global::init()`.
pub const ENV_VAR: &str = "ENV";

/// `ENV` value that selects the production preset.
pub const PRODUCTION_ENV: &str = "production";

/// Application name attached by the facade's own presets.
pub const DEFAULT_APP_NAME: &str = "app";

/// Primary log destination used by both presets.
pub const DEFAULT_LOG_FILE: &str = "/log/log.log";

/// Error log destination used by both presets.
pub const DEFAULT_ERR_LOG_FILE: &str = "/log/error.log";

/// Options consumed by a builder function to produce a [`crate::Logger`].
///
/// Constructed once per builder invocation and discarded afterwards; the
/// built logger does not keep a reference to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogOptions {
    /// Development mode: stack traces are attached to warn-and-above records.
    pub development: bool,

    /// Minimum level; records below it are dropped on every sink.
    pub level: Level,

    /// Attached to every emitted record as the fixed `APP` field.
    pub app_name: String,

    /// File destination for all records. `None` means console only.
    pub log_file: Option<PathBuf>,

    /// File destination for error-and-above records. `None` means console
    /// only. The rotating strategy validates this path but does not route to
    /// it (see [`crate::builder::build_rotating`]).
    pub err_log_file: Option<PathBuf>,

    /// Rotation threshold for the active file, in megabytes. Zero disables
    /// size-based rotation. Used only by the rotating strategy.
    pub max_size_mb: u64,

    /// Archived files older than this many days are purged on the next
    /// rotation. Zero disables age-based pruning.
    pub max_age_days: u64,

    /// At most this many archived files are retained, oldest evicted first.
    /// Zero retains all of them.
    pub max_backups: usize,
}

impl LogOptions {
    /// Production preset: info minimum, 128 MB / 30 days / 30 backups.
    pub fn production(app_name: &str) -> Self {
        Self {
            development: false,
            level: Level::Info,
            app_name: app_name.to_string(),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            err_log_file: Some(PathBuf::from(DEFAULT_ERR_LOG_FILE)),
            max_size_mb: 128,
            max_age_days: 30,
            max_backups: 30,
        }
    }

    /// Default (non-production) preset: debug minimum, no rotation limits.
    pub fn default_for(app_name: &str) -> Self {
        Self {
            development: false,
            level: Level::Debug,
            app_name: app_name.to_string(),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            err_log_file: Some(PathBuf::from(DEFAULT_ERR_LOG_FILE)),
            max_size_mb: 0,
            max_age_days: 0,
            max_backups: 0,
        }
    }

    /// Rotation thresholds of these options as a policy value.
    pub fn rotation_policy(&self) -> RotationPolicy {
        RotationPolicy {
            max_size_mb: self.max_size_mb,
            max_age_days: self.max_age_days,
            max_backups: self.max_backups,
        }
    }
}

/// Returns true when the given `ENV` value selects the production preset.
pub fn is_production_env(value: Option<&str>) -> bool {
    value == Some(PRODUCTION_ENV)
}
