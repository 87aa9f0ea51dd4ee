//! Error types for option loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading options.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an option of the wrong type.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading an options file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An option parsed but its value is out of range.
	#[error("invalid value for option '{option}': {reason}")]
	Invalid {
		/// The option's TOML key.
		option: &'static str,
		/// Why the value was rejected.
		reason: &'static str,
	},
}

/// Result type for option loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
