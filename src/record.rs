//! Assembly of one emitted record into a JSON line.
//!
//! Fixed keys, in the shape every sink receives:
//! `time` (ISO-8601 with millisecond precision), `level` (lowercase),
//! `logger` (only when the logger is named), `caller` (`file:line` of the
//! call site), `msg`, the fixed `APP` field, any fields accumulated on the
//! logger, any fields passed at the call site, and `stacktrace` for
//! warn-and-above in development mode.

use std::panic::Location;

use chrono::{Local, SecondsFormat};
use serde_json::{Map, Value};

use crate::field::Field;
use crate::level::Level;

pub(crate) struct Record<'a> {
    pub level: Level,
    pub msg: &'a str,
    pub caller: &'static Location<'static>,
}

pub(crate) fn encode(
    rec: &Record<'_>,
    app_name: &str,
    logger_name: Option<&str>,
    base_fields: &[Field],
    fields: &[Field],
    stacktrace: Option<&str>,
) -> Vec<u8> {
    let mut map = Map::new();
    map.insert(
        "time".to_string(),
        Value::String(Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)),
    );
    map.insert(
        "level".to_string(),
        Value::String(rec.level.as_str().to_string()),
    );
    if let Some(name) = logger_name {
        map.insert("logger".to_string(), Value::String(name.to_string()));
    }
    map.insert(
        "caller".to_string(),
        Value::String(format!("{}:{}", rec.caller.file(), rec.caller.line())),
    );
    map.insert("msg".to_string(), Value::String(rec.msg.to_string()));
    map.insert("APP".to_string(), Value::String(app_name.to_string()));
    for f in base_fields.iter().chain(fields) {
        map.insert(f.key.clone(), f.value.clone());
    }
    if let Some(trace) = stacktrace {
        map.insert("stacktrace".to_string(), Value::String(trace.to_string()));
    }

    // Serializing a Value cannot fail; an empty line is the harmless fallback.
    let mut line = serde_json::to_vec(&Value::Object(map)).unwrap_or_default();
    line.push(b'\n');
    line
}
