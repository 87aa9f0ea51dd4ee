//! Rope-backed reference buffer with grouped undo history.

use quill_primitives::Point;
use ropey::Rope;
use tracing::trace;
use unicode_width::UnicodeWidthChar;

use crate::{Buffer, BufferChange, BufferError, ChangeKind, Result, graphemes};

/// Maximum number of undo groups kept per buffer.
pub const MAX_UNDO: usize = 100;

/// A buffer storing its text in a [`Rope`].
///
/// Edits made through [`Buffer`] methods are recorded with
/// [`Buffer::apply_change`]; consecutive chained changes form one undo group.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
	text: Rope,
	undo: Vec<Vec<BufferChange>>,
	redo: Vec<Vec<BufferChange>>,
	read_only: bool,
}

impl RopeBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_text(text: &str) -> Self {
		Self {
			text: Rope::from(text),
			..Self::default()
		}
	}

	pub fn text(&self) -> &Rope {
		&self.text
	}

	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	pub fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	/// Number of undo groups available.
	pub fn undo_depth(&self) -> usize {
		self.undo.len()
	}

	/// Reverts the most recent undo group, returning the cursor to restore.
	pub fn undo(&mut self) -> Option<Point> {
		let group = self.undo.pop()?;
		for change in group.iter().rev() {
			match change.kind {
				ChangeKind::Insertion => self.remove_raw(change.location, change.text.chars().count()),
				ChangeKind::Deletion => self.insert_raw(change.location, &change.text),
			}
		}
		let cursor = group.first().map(|c| c.cursor_before);
		trace!(changes = group.len(), "Undid group");
		self.redo.push(group);
		cursor
	}

	/// Re-applies the most recently undone group, returning the cursor to restore.
	pub fn redo(&mut self) -> Option<Point> {
		let group = self.redo.pop()?;
		for change in &group {
			match change.kind {
				ChangeKind::Insertion => self.insert_raw(change.location, &change.text),
				ChangeKind::Deletion => self.remove_raw(change.location, change.text.chars().count()),
			}
		}
		let cursor = group.last().map(|c| c.cursor_after);
		self.undo.push(group);
		cursor
	}

	/// Converts a point to a char index, accepting the position after the last
	/// character of a line.
	fn char_idx(&self, at: Point) -> Option<usize> {
		if at.row >= self.text.len_lines() || at.col > self.line_len(at.row) {
			return None;
		}
		Some(self.text.line_to_char(at.row) + at.col)
	}

	fn point_of(&self, char_idx: usize) -> Point {
		let char_idx = char_idx.min(self.text.len_chars());
		let row = self.text.char_to_line(char_idx);
		Point::new(row, char_idx - self.text.line_to_char(row))
	}

	fn insert_raw(&mut self, at: Point, text: &str) {
		if let Some(idx) = self.char_idx(at) {
			self.text.insert(idx, text);
		}
	}

	fn remove_raw(&mut self, at: Point, count: usize) {
		if let Some(idx) = self.char_idx(at) {
			let end = (idx + count).min(self.text.len_chars());
			self.text.remove(idx..end);
		}
	}

	fn check_writable(&self) -> Result<()> {
		if self.read_only { Err(BufferError::ReadOnly) } else { Ok(()) }
	}
}

impl Buffer for RopeBuffer {
	fn line_count(&self) -> usize {
		self.text.len_lines()
	}

	fn line_len(&self, row: usize) -> usize {
		let Some(line) = self.text.get_line(row) else {
			return 0;
		};
		let len = line.len_chars();
		if len > 0 && line.char(len - 1) == '\n' { len - 1 } else { len }
	}

	fn insert_char(&mut self, ch: char, at: Point) -> Result<()> {
		self.check_writable()?;
		let idx = self.char_idx(at).ok_or(BufferError::OutOfBounds(at))?;
		self.text.insert_char(idx, ch);
		Ok(())
	}

	fn remove_string(&mut self, at: Point, count: usize, collapse_empty_line: bool) -> Result<()> {
		self.check_writable()?;
		let start = self.char_idx(at).ok_or(BufferError::OutOfBounds(at))?;
		let end = start + count;
		if end > self.text.len_chars() {
			return Err(BufferError::InvalidRemoval { at, count });
		}
		if !collapse_empty_line && self.text.slice(start..end).chars().any(|c| c == '\n') {
			return Err(BufferError::InvalidRemoval { at, count });
		}
		self.text.remove(start..end);
		Ok(())
	}

	fn dupe_string(&self, at: Point, count: usize) -> Option<String> {
		let start = self.char_idx(at)?;
		let end = start.checked_add(count)?;
		if end > self.text.len_chars() {
			return None;
		}
		Some(self.text.slice(start..end).to_string())
	}

	fn advance_point(&self, at: Point, delta: isize) -> Point {
		let row = at.row.min(self.text.len_lines().saturating_sub(1));
		let col = at.col.min(self.line_len(row));
		let start = self.text.line_to_char(row) + col;
		self.point_of(graphemes::step(self.text.slice(..), start, delta))
	}

	fn move_point(&self, at: Point, delta: (isize, isize), tab_width: usize, clamp: bool) -> Point {
		let (dx, dy) = delta;
		let last_row = self.text.len_lines().saturating_sub(1);
		let mut point = at;
		point.row = at.row.saturating_add_signed(dy).min(last_row);

		if dy != 0 {
			let target = self.visible_column(at, tab_width);
			point.col = self.col_at_visible(point.row, target, tab_width);
		}

		if dx != 0 {
			let line = self.text.line(point.row);
			let line_len = self.line_len(point.row);
			let col = graphemes::step(line, point.col.min(line_len), dx);
			point.col = col.min(line_len);
		}

		if clamp {
			point.col = point.col.min(self.line_len(point.row));
		}
		point
	}

	fn visible_column(&self, at: Point, tab_width: usize) -> usize {
		let Some(line) = self.text.get_line(at.row) else {
			return 0;
		};
		line.chars().take(at.col).fold(0, |col, ch| col + char_width(ch, col, tab_width))
	}

	fn apply_change(&mut self, change: BufferChange) {
		self.redo.clear();
		match self.undo.last_mut() {
			Some(group) if change.chain => group.push(change),
			_ => {
				if self.undo.len() >= MAX_UNDO {
					self.undo.remove(0);
				}
				self.undo.push(vec![change]);
			}
		}
	}
}

impl RopeBuffer {
	/// Finds the column in `row` whose display position covers `target`.
	fn col_at_visible(&self, row: usize, target: usize, tab_width: usize) -> usize {
		let line_len = self.line_len(row);
		let mut visible = 0;
		for (col, ch) in self.text.line(row).chars().take(line_len).enumerate() {
			let width = char_width(ch, visible, tab_width);
			if visible + width > target {
				return col;
			}
			visible += width;
		}
		line_len
	}
}

fn char_width(ch: char, visible_col: usize, tab_width: usize) -> usize {
	if ch == '\t' {
		let tab_width = tab_width.max(1);
		tab_width - visible_col % tab_width
	} else {
		ch.width().unwrap_or(0)
	}
}

impl std::fmt::Display for RopeBuffer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.text)
	}
}
