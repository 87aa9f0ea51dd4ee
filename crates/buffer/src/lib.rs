//! The buffer side of the editing core.
//!
//! - [`Buffer`] - the contract the modal engine edits through
//! - [`BufferChange`] - an edit record handed to the buffer's undo history
//! - [`RopeBuffer`] - a rope-backed implementation with grouped undo/redo

mod change;
mod error;
pub mod graphemes;
mod rope_buffer;

pub use change::{BufferChange, ChangeKind};
pub use error::{BufferError, Result};
use quill_primitives::Point;
pub use rope_buffer::{MAX_UNDO, RopeBuffer};

/// Text storage as seen by the editing core.
///
/// Points are `(row, col)` pairs where `col` counts characters. A line break
/// counts as one character at the end of its line.
pub trait Buffer {
	/// Number of lines, including the empty line after a trailing newline.
	fn line_count(&self) -> usize;

	/// Number of characters in `row`, excluding its line break.
	fn line_len(&self, row: usize) -> usize;

	/// Inserts `ch` at `at`.
	fn insert_char(&mut self, ch: char, at: Point) -> Result<()>;

	/// Removes `count` characters starting at `at`.
	///
	/// With `collapse_empty_line`, the removal may consume line breaks and join
	/// lines. Without it, a removal that would cross a line break is rejected.
	fn remove_string(&mut self, at: Point, count: usize, collapse_empty_line: bool) -> Result<()>;

	/// Copies `count` characters starting at `at`.
	fn dupe_string(&self, at: Point, count: usize) -> Option<String>;

	/// Moves `at` by `delta` grapheme clusters through the text, crossing lines.
	///
	/// The result is clamped to the start and end of the buffer.
	fn advance_point(&self, at: Point, delta: isize) -> Point;

	/// Moves `at` by a `(columns, rows)` delta.
	///
	/// Vertical movement keeps the visual column (tabs expand to `tab_width`).
	/// Horizontal movement stays on the line. With `clamp`, the column is pinned
	/// to the line's length.
	fn move_point(&self, at: Point, delta: (isize, isize), tab_width: usize, clamp: bool) -> Point;

	/// Display column of `at`, expanding tabs to `tab_width` stops.
	fn visible_column(&self, at: Point, tab_width: usize) -> usize;

	/// Records an edit that has already been made in the undo history.
	///
	/// A change with `chain` set joins the most recent undo group.
	fn apply_change(&mut self, change: BufferChange);
}
