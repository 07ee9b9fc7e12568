//! Structured key-value fields attached to individual records.

use serde::Serialize;
use serde_json::Value;

/// One key-value pair serialized alongside a record's message.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

/// Builds a [`Field`] from any serializable value.
///
/// A value that fails to serialize is rendered as a placeholder string
/// instead of failing the log call; a broken field must not lose the record
/// it rides on.
///
/// ```
/// use applog::field;
///
/// let f = field("port", 8080);
/// assert_eq!(f.key, "port");
/// assert_eq!(f.value, serde_json::json!(8080));
/// ```
pub fn field(key: impl Into<String>, value: impl Serialize) -> Field {
    let value = serde_json::to_value(&value)
        .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")));
    Field {
        key: key.into(),
        value,
    }
}

/// Builds a [`Field`] carrying a duration rendered in seconds.
///
/// ```
/// use std::time::Duration;
/// use applog::duration_field;
///
/// let f = duration_field("elapsed", Duration::from_millis(1500));
/// assert_eq!(f.value, serde_json::json!(1.5));
/// ```
pub fn duration_field(key: impl Into<String>, value: std::time::Duration) -> Field {
    field(key, value.as_secs_f64())
}
