//! Editor options.
//!
//! Options are written in TOML with kebab-case keys. Every key is optional and
//! falls back to its default:
//!
//! ```toml
//! tab-width = 4
//! horizontal-scroll-off = 10
//! vertical-scroll-off = 5
//! max-key-binds = 128
//! max-command-len = 32
//! ```

mod error;

use std::path::Path;

pub use error::{ConfigError, Result};
use serde::Deserialize;

/// Options read by the layout and input crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Options {
	/// Display width of a tab character.
	pub tab_width: usize,
	/// Columns kept visible left and right of the cursor.
	pub horizontal_scroll_off: u16,
	/// Rows kept visible above and below the cursor.
	pub vertical_scroll_off: u16,
	/// Capacity of the normal-mode key-bind table.
	pub max_key_binds: usize,
	/// Longest pending normal-mode command, in keys.
	pub max_command_len: usize,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			tab_width: 4,
			horizontal_scroll_off: 10,
			vertical_scroll_off: 5,
			max_key_binds: 128,
			max_command_len: 32,
		}
	}
}

impl Options {
	/// Parses and validates options from TOML source.
	pub fn from_toml_str(src: &str) -> Result<Self> {
		let options: Options = toml::from_str(src)?;
		options.validate()?;
		Ok(options)
	}

	/// Reads options from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let options = Self::from_toml_str(&src)?;
		tracing::debug!(path = %path.display(), ?options, "Loaded options");
		Ok(options)
	}

	/// Checks value ranges that the type system cannot express.
	pub fn validate(&self) -> Result<()> {
		if self.tab_width == 0 {
			return Err(ConfigError::Invalid {
				option: "tab-width",
				reason: "must be at least 1",
			});
		}
		if self.max_key_binds == 0 {
			return Err(ConfigError::Invalid {
				option: "max-key-binds",
				reason: "must be at least 1",
			});
		}
		if self.max_command_len == 0 {
			return Err(ConfigError::Invalid {
				option: "max-command-len",
				reason: "must be at least 1",
			});
		}
		Ok(())
	}
}
