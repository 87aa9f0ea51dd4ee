//! Key event types consumed by the modal engine.

mod modifiers;

pub use modifiers::Modifiers;

/// The physical or logical key that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Enter,
	Tab,
	Backspace,
	Delete,
	Esc,
	Left,
	Right,
	Up,
	Down,
	Home,
	End,
	PageUp,
	PageDown,
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// An unmodified character key.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c))
	}

	pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self { modifiers, ..self }
	}

	pub fn is_escape(&self) -> bool {
		self.code == KeyCode::Esc
	}

	pub fn is_backspace(&self) -> bool {
		self.code == KeyCode::Backspace
	}

	/// Returns the character for unmodified (or shifted) character keys.
	pub fn as_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
			_ => None,
		}
	}

	/// Returns the decimal value for unmodified digit keys.
	pub fn as_digit(&self) -> Option<u32> {
		self.as_char().and_then(|c| c.to_digit(10))
	}

	/// Returns the text this key produces when typed into a buffer.
	///
	/// Printable characters map to themselves and Enter to `'\n'`. Tab maps to a
	/// literal `'\t'` as well, even though it is not printable, so insert mode
	/// can type indentation.
	pub fn typed_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Enter => Some('\n'),
			KeyCode::Tab => Some('\t'),
			_ => self.as_char().filter(|c| !c.is_control()),
		}
	}
}

impl From<char> for Key {
	fn from(c: char) -> Self {
		Key::char(c)
	}
}

impl From<KeyCode> for Key {
	fn from(code: KeyCode) -> Self {
		Key::new(code)
	}
}
