//! Engine state and key dispatch.

use quill_buffer::Buffer;
use quill_config::Options;
use quill_layout::View;
use quill_primitives::{Key, Mode};
use tracing::trace;

use crate::{Action, Edit, InputError, KeyBinds, MotionRange, ParseFn, parse_action};

/// What handling a key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
	/// A normal-mode action was applied. Carries whether its verb succeeded.
	Complete(bool),
	/// The key joined a pending normal-mode command.
	Pending,
	/// The engine switched to this mode.
	ModeChange(Mode),
	/// The key was handled, or ignored, without completing a command.
	Consumed,
}

/// Modal editing engine, one per editing session.
#[derive(Debug, Clone)]
pub struct Vim {
	pub(crate) mode: Mode,
	pub(crate) pending: Vec<Key>,
	pub(crate) key_binds: KeyBinds,
	/// Whether the next edit joins the previous undo group.
	pub(crate) chain_undo: bool,
	max_command_len: usize,
}

impl Vim {
	/// Creates an engine in normal mode with the default key binds.
	pub fn new(options: &Options) -> Self {
		Self {
			mode: Mode::Normal,
			pending: Vec::new(),
			key_binds: KeyBinds::with_defaults(options.max_key_binds),
			chain_undo: false,
			max_command_len: options.max_command_len,
		}
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Keys of the normal-mode command typed so far.
	pub fn pending(&self) -> &[Key] {
		&self.pending
	}

	pub fn chain_undo(&self) -> bool {
		self.chain_undo
	}

	pub fn key_binds(&self) -> &KeyBinds {
		&self.key_binds
	}

	/// Binds `key` in normal mode. See [`KeyBinds::bind`].
	pub fn bind_key(&mut self, key: Key, parse: ParseFn) -> Result<(), InputError> {
		self.key_binds.bind(key, parse)
	}

	/// Handles one key against `view`, editing `buffer`, the buffer the view shows.
	pub fn handle_key<D>(&mut self, view: &mut View<D>, buffer: &mut dyn Buffer, key: Key, options: &Options) -> KeyResult {
		trace!(?key, mode = self.mode.name(), pending = self.pending.len(), "Handling key");
		match self.mode {
			Mode::Insert => self.handle_insert_key(view, buffer, key, options),
			Mode::Normal => self.handle_normal_key(view, buffer, key),
		}
	}

	fn handle_normal_key<D>(&mut self, view: &mut View<D>, buffer: &mut dyn Buffer, key: Key) -> KeyResult {
		if key.is_escape() {
			self.pending.clear();
			return KeyResult::Consumed;
		}

		if self.pending.len() < self.max_command_len {
			self.pending.push(key);
		} else {
			trace!(?key, "Pending command full, key dropped");
		}

		let Some(action) = parse_action(&self.pending, &self.key_binds) else {
			return KeyResult::Pending;
		};
		let success = self.apply_action(&action, view, buffer);
		self.pending.clear();
		KeyResult::Complete(success)
	}

	/// Runs `action` at the view's cursor and enters its end mode.
	///
	/// The motion's range is ordered before the verb sees it. Without a motion
	/// the range is empty at the cursor.
	pub fn apply_action<D>(&mut self, action: &Action, view: &mut View<D>, buffer: &mut dyn Buffer) -> bool {
		let range = match action.motion {
			Some(motion) => {
				let range = motion(action, &*buffer, view.cursor);
				MotionRange::new(range.first, range.last)
			}
			None => MotionRange::at(view.cursor),
		};

		let success = match action.verb {
			Some(verb) => verb(
				action,
				range,
				&mut Edit {
					buffer,
					cursor: &mut view.cursor,
					chain_undo: &mut self.chain_undo,
				},
			),
			None => true,
		};

		if self.mode != action.end_mode {
			trace!(from = self.mode.name(), to = action.end_mode.name(), "Mode change");
		}
		self.mode = action.end_mode;
		success
	}
}

#[cfg(test)]
mod tests;
