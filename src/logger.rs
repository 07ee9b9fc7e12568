//! The built logger: level filter, sink fan-out, fixed initial fields.

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::process;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::LogOptions;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::level::Level;
use crate::record::{self, Record};
use crate::writer::SinkSet;

/// Handle over a level filter, one or more sinks, and the fields attached to
/// every record.
///
/// Cloning is cheap and clones share the underlying sinks, so `named` and
/// `with_fields` derive child loggers without reopening files. The handle is
/// `Send + Sync`; sink access is serialized by an internal mutex, and callers
/// need no external locking.
#[derive(Clone)]
pub struct Logger {
    level: Level,
    development: bool,
    app_name: Arc<str>,
    name: Option<Arc<str>>,
    base_fields: Arc<Vec<Field>>,
    sinks: Arc<Mutex<SinkSet>>,
}

impl Logger {
    pub(crate) fn from_parts(opts: &LogOptions, sinks: SinkSet) -> Self {
        Self {
            level: opts.level,
            development: opts.development,
            app_name: Arc::from(opts.app_name.as_str()),
            name: None,
            base_fields: Arc::new(Vec::new()),
            sinks: Arc::new(Mutex::new(sinks)),
        }
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Child logger carrying a `logger` name field on every record.
    pub fn named(&self, name: &str) -> Logger {
        let mut child = self.clone();
        child.name = Some(Arc::from(name));
        child
    }

    /// Child logger with additional fields attached to every record.
    pub fn with_fields(&self, fields: &[Field]) -> Logger {
        let mut child = self.clone();
        let mut accumulated = (*child.base_fields).clone();
        accumulated.extend_from_slice(fields);
        child.base_fields = Arc::new(accumulated);
        child
    }

    /// Logs a message with structured fields at the given level.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        self.write(level, msg, fields, Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.write(Level::Debug, msg, fields, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.write(Level::Info, msg, fields, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, msg: &str, fields: &[Field]) {
        self.write(Level::Warn, msg, fields, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, msg: &str, fields: &[Field]) {
        self.write(Level::Error, msg, fields, Location::caller());
    }

    /// Logs a templated message at the given level.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.write(level, &args.to_string(), &[], Location::caller());
    }

    /// Logs at fatal level, flushes, and terminates the process.
    ///
    /// The contract is log, flush, then exit with status 1 — a direct
    /// control-flow terminal, never a panic. Termination happens even when
    /// fatal output is suppressed by the level filter.
    #[track_caller]
    pub fn fatal(&self, msg: &str, fields: &[Field]) -> ! {
        self.write(Level::Fatal, msg, fields, Location::caller());
        let _ = self.sync();
        process::exit(1);
    }

    /// Templated form of [`fatal`](Self::fatal).
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.write(Level::Fatal, &args.to_string(), &[], Location::caller());
        let _ = self.sync();
        process::exit(1);
    }

    /// Flushes any buffered output on all sinks.
    ///
    /// Call this on graceful shutdown; it may block briefly.
    pub fn sync(&self) -> Result<()> {
        self.lock_sinks().flush().map_err(Error::Flush)
    }

    fn write(&self, level: Level, msg: &str, fields: &[Field], caller: &'static Location<'static>) {
        if !self.enabled(level) {
            return;
        }

        let stacktrace = if self.development && level >= Level::Warn {
            Some(Backtrace::force_capture().to_string())
        } else {
            None
        };

        let rec = Record { level, msg, caller };
        let line = record::encode(
            &rec,
            &self.app_name,
            self.name.as_deref(),
            &self.base_fields,
            fields,
            stacktrace.as_deref(),
        );
        self.lock_sinks().write_record(level, &line);
    }

    // A panic while holding the sink lock must not silence every other
    // thread; recover the poisoned guard and keep writing.
    fn lock_sinks(&self) -> MutexGuard<'_, SinkSet> {
        self.sinks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("development", &self.development)
            .field("app_name", &self.app_name)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
