//! Logging macros for the EcoRide client
//!
//! The same macros work in the browser and in native test runs. All of them
//! compile to no-ops in release builds.
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | stderr |
//! | `info_log!` | Required | None | `console.info` | stderr |
//! | `warn_log!` | Required | None | `console.warn` | stderr |
//! | `error_log!` | Required | None | `console.error` | stderr |
//!
//! ```ignore
//! use ecoride_pages::{info_log, warn_log};
//!
//! info_log!("Rendered {}", path);
//! warn_log!("Access denied to {}", path);
//! ```

use std::fmt;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Debug,
	Info,
	Warn,
	Error,
}

impl Level {
	/// Prefix used for native output
	pub fn label(self) -> &'static str {
		match self {
			Self::Debug => "DEBUG",
			Self::Info => "INFO",
			Self::Warn => "WARN",
			Self::Error => "ERROR",
		}
	}
}

/// Writes one log line. Use the macros instead of calling this directly.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
	let line = wasm_bindgen::JsValue::from_str(&format!("[ecoride] {}", args));
	match level {
		Level::Debug => web_sys::console::debug_1(&line),
		Level::Info => web_sys::console::info_1(&line),
		Level::Warn => web_sys::console::warn_1(&line),
		Level::Error => web_sys::console::error_1(&line),
	}
}

/// Writes one log line. Use the macros instead of calling this directly.
#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
	eprintln!("[{}] [ecoride] {}", level.label(), args);
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::logging::emit($crate::logging::Level::Debug, format_args!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::logging::emit($crate::logging::Level::Info, format_args!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::logging::emit($crate::logging::Level::Warn, format_args!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (requires `debug_assertions`)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::logging::emit($crate::logging::Level::Error, format_args!($($arg)*));
	}};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
