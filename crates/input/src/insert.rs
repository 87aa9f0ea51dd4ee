//! Insert mode key handling.

use quill_buffer::{Buffer, BufferChange};
use quill_config::Options;
use quill_layout::{View, follow_cursor};
use quill_primitives::{Key, KeyCode, Mode, Point, SpatialDirection};
use tracing::{trace, warn};

use crate::{KeyResult, Vim};

impl Vim {
	/// Processes a key press in insert mode.
	///
	/// Typed characters and backspace edit the buffer and record a change
	/// chained to the previous edit. Arrows move the cursor and end the chain.
	/// Escape returns to normal mode.
	pub(crate) fn handle_insert_key<D>(
		&mut self,
		view: &mut View<D>,
		buffer: &mut dyn Buffer,
		key: Key,
		options: &Options,
	) -> KeyResult {
		if key.is_escape() {
			self.mode = Mode::Normal;
			return KeyResult::ModeChange(Mode::Normal);
		}

		if key.is_backspace() {
			self.backspace(view, buffer);
		} else if let Some(direction) = arrow_direction(key) {
			let delta = direction.delta();
			view.cursor = buffer.move_point(view.cursor, delta, options.tab_width, true);
			self.chain_undo = false;
		} else if let Some(ch) = key.typed_char() {
			self.insert(view, buffer, ch);
		} else {
			return KeyResult::Consumed;
		}

		let column = buffer.visible_column(view.cursor, options.tab_width);
		view.scroll = follow_cursor(view, column, options.horizontal_scroll_off, options.vertical_scroll_off);
		KeyResult::Consumed
	}

	fn insert<D>(&mut self, view: &mut View<D>, buffer: &mut dyn Buffer, ch: char) {
		let before = view.cursor;
		if let Err(error) = buffer.insert_char(ch, before) {
			warn!(%error, ?ch, cursor = %before, "Buffer rejected insertion");
			return;
		}
		let after = buffer.advance_point(before, 1);
		buffer.apply_change(BufferChange::insertion(ch, before, after, self.chain_undo));
		trace!(?ch, from = %before, to = %after, chain = self.chain_undo, "Inserted");
		view.cursor = after;
		self.chain_undo = true;
	}

	fn backspace<D>(&mut self, view: &mut View<D>, buffer: &mut dyn Buffer) {
		let before = view.cursor;
		if before.is_origin() {
			return;
		}
		let at = buffer.advance_point(before, -1);
		let count = removed_len(buffer, at, before);
		let Some(text) = buffer.dupe_string(at, count) else {
			warn!(at = %at, count, "Nothing to remove before cursor");
			return;
		};
		if let Err(error) = buffer.remove_string(at, count, true) {
			warn!(%error, at = %at, count, "Buffer rejected deletion");
			return;
		}
		buffer.apply_change(BufferChange::deletion(text, at, before, at, self.chain_undo));
		trace!(from = %before, to = %at, chain = self.chain_undo, "Deleted");
		view.cursor = at;
		self.chain_undo = true;
	}
}

/// Characters between `from` and `to`, where `from` is the earlier point.
///
/// When the points are on different rows the span ends a line, so it runs to
/// that line's end and includes its break.
fn removed_len(buffer: &dyn Buffer, from: Point, to: Point) -> usize {
	if from.row == to.row {
		to.col.saturating_sub(from.col).max(1)
	} else {
		buffer.line_len(from.row).saturating_sub(from.col) + 1
	}
}

fn arrow_direction(key: Key) -> Option<SpatialDirection> {
	if !key.modifiers.is_empty() {
		return None;
	}
	match key.code {
		KeyCode::Left => Some(SpatialDirection::Left),
		KeyCode::Right => Some(SpatialDirection::Right),
		KeyCode::Up => Some(SpatialDirection::Up),
		KeyCode::Down => Some(SpatialDirection::Down),
		_ => None,
	}
}
