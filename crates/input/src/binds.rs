use quill_primitives::Key;
use tracing::{trace, warn};

use crate::{Action, InputError, Parse, ParseFn, parse_insert_mode};

/// One keystroke and the capability it invokes.
#[derive(Debug, Clone, Copy)]
pub struct KeyBind {
	pub key: Key,
	pub parse: ParseFn,
}

/// Normal-mode key-bind table with a fixed capacity.
///
/// Keys are unique: binding a key again replaces its capability.
#[derive(Debug, Clone)]
pub struct KeyBinds {
	binds: Vec<KeyBind>,
	capacity: usize,
}

impl KeyBinds {
	/// An empty table holding at most `capacity` keys.
	pub fn new(capacity: usize) -> Self {
		Self {
			binds: Vec::new(),
			capacity,
		}
	}

	/// A table with `i` bound to [`parse_insert_mode`].
	pub fn with_defaults(capacity: usize) -> Self {
		let mut binds = Self::new(capacity);
		if let Err(error) = binds.bind(Key::char('i'), parse_insert_mode) {
			warn!(%error, "Default key bind dropped");
		}
		binds
	}

	/// Binds `key` to `parse`, replacing any existing bind for `key`.
	pub fn bind(&mut self, key: Key, parse: ParseFn) -> Result<(), InputError> {
		if let Some(existing) = self.binds.iter_mut().find(|b| b.key == key) {
			existing.parse = parse;
			trace!(?key, "Rebound key");
			return Ok(());
		}
		if self.binds.len() >= self.capacity {
			warn!(?key, capacity = self.capacity, "Key-bind table full");
			return Err(InputError::KeyBindsFull { capacity: self.capacity });
		}
		self.binds.push(KeyBind { key, parse });
		Ok(())
	}

	pub fn get(&self, key: Key) -> Option<ParseFn> {
		self.binds.iter().find(|b| b.key == key).map(|b| b.parse)
	}

	pub fn len(&self) -> usize {
		self.binds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.binds.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn iter(&self) -> impl Iterator<Item = &KeyBind> {
		self.binds.iter()
	}

	/// Offers `key` to every capability bound to it until one handles it.
	pub(crate) fn dispatch(&self, key: Key, action: &mut Action) -> Parse {
		self.binds
			.iter()
			.filter(|b| b.key == key)
			.map(|b| (b.parse)(action))
			.find(|&result| result != Parse::NotHandled)
			.unwrap_or(Parse::NotHandled)
	}
}
