//! Output sinks: console, plain file, and the size-rotating file writer.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};
use crate::level::Level;
use crate::rotation::{self, RotationPolicy};

/// A destination that receives encoded records.
pub(crate) type Sink = Box<dyn Write + Send>;

/// The sinks of one logger.
///
/// Every record goes to all `primary` sinks; error-and-above records
/// additionally go to the `error` sinks.
pub(crate) struct SinkSet {
    pub primary: Vec<Sink>,
    pub error: Vec<Sink>,
}

impl SinkSet {
    /// Best-effort fan-out; a failing sink never fails the log call.
    pub fn write_record(&mut self, level: Level, line: &[u8]) {
        for sink in &mut self.primary {
            let _ = sink.write_all(line);
        }
        if level >= Level::Error {
            for sink in &mut self.error {
                let _ = sink.write_all(line);
            }
        }
    }

    /// Flushes every sink, reporting the first failure after trying them all.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut first_err = None;
        for sink in self.primary.iter_mut().chain(self.error.iter_mut()) {
            if let Err(e) = sink.flush() {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

pub(crate) fn console_sink() -> Sink {
    Box::new(io::stdout())
}

/// Opens `path` for appending, creating parent directories as needed.
pub(crate) fn file_sink(path: &Path) -> Result<Sink> {
    Ok(Box::new(open_append(path)?))
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("cannot create log directory {}: {e}", parent.display()))
            })?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::Config(format!("cannot open log file {}: {e}", path.display())))
}

/// Append-only file writer that caps the active file's size.
///
/// Once a pending write would push the active file past the policy's size
/// cap, the file is closed, renamed to a timestamped backup, and a fresh
/// active file is started; backups beyond `max_backups` or older than
/// `max_age_days` are pruned in the same step. A single write larger than the
/// cap is not split; it lands in a fresh file in one piece.
#[derive(Debug)]
pub struct RotatingFileWriter {
    path: PathBuf,
    max_bytes: u64,
    policy: RotationPolicy,
    file: File,
    written: u64,
}

impl RotatingFileWriter {
    /// Opens (or creates) the active file at `path`.
    pub fn new(path: impl Into<PathBuf>, policy: RotationPolicy) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            path,
            max_bytes: policy.max_bytes(),
            policy,
            file,
            written,
        })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let backup = rotation::backup_path(&self.path, Local::now());
        fs::rename(&self.path, &backup)?;
        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.written = 0;
        // Pruning failures must not take down the write that got us here.
        let _ = rotation::prune_backups(&self.path, &self.policy);
        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.max_bytes > 0
            && self.written > 0
            && self.written + buf.len() as u64 > self.max_bytes
        {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
