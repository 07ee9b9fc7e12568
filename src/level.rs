//! Log severity levels.
//!
//! Levels are totally ordered (`Debug < Info < Warn < Error < Fatal`) so the
//! logger can drop records below its configured minimum with a single
//! comparison. Names serialize in lowercase, matching the `level` field of
//! every emitted record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Minimum-severity threshold and per-record severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Detailed execution flow; normally enabled only outside production.
    Debug,
    /// Normal operation events.
    Info,
    /// Recoverable issues and fallback actions.
    Warn,
    /// Failures that do not stop the process.
    Error,
    /// Failures that terminate the process (see `Logger::fatal`).
    Fatal,
}

impl Level {
    /// Lowercase name as it appears in emitted records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Parses a lowercase level name.
    ///
    /// Unknown names are a configuration error rather than a silent default,
    /// so a typo in a level string fails initialization instead of quietly
    /// changing the process's verbosity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(Error::Config(format!("unrecognized log level {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn parse_accepts_every_lowercase_name() {
        for (name, level) in [
            ("debug", Level::Debug),
            ("info", Level::Info),
            ("warn", Level::Warn),
            ("error", Level::Error),
            ("fatal", Level::Fatal),
        ] {
            assert_eq!(name.parse::<Level>().unwrap(), level);
            assert_eq!(level.as_str(), name);
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, Error::Config(_)), "expected Config error, got {err:?}");
        assert!(err.to_string().contains("verbose"));
    }
}
