//! Templated logging macros forwarding to the global facade.
//!
//! These are the format-string counterparts of `global::info` and friends:
//!
//! ```
//! applog::infof!("listening on port {}", 8080);
//! ```
//!
//! Before `init()` they drop the record, like the plain forwarding functions.

/// Logs a templated message at debug level through the global facade.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::global::logf($crate::Level::Debug, ::core::format_args!($($arg)*))
    };
}

/// Logs a templated message at info level through the global facade.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {
        $crate::global::logf($crate::Level::Info, ::core::format_args!($($arg)*))
    };
}

/// Logs a templated message at warn level through the global facade.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::global::logf($crate::Level::Warn, ::core::format_args!($($arg)*))
    };
}

/// Logs a templated message at error level through the global facade.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::global::logf($crate::Level::Error, ::core::format_args!($($arg)*))
    };
}

/// Logs a templated message at fatal level, then terminates the process.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::global::fatalf(::core::format_args!($($arg)*))
    };
}
