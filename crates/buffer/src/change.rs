use quill_primitives::Point;

/// Whether a change added or removed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
	Insertion,
	Deletion,
}

/// One edit as recorded in a buffer's undo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferChange {
	pub kind: ChangeKind,
	/// Mirrors the flag the edit was made with, so undo can restore joined lines.
	pub collapse_empty_line: bool,
	/// The inserted or removed text.
	pub text: String,
	/// Where the text starts.
	pub location: Point,
	pub cursor_before: Point,
	pub cursor_after: Point,
	/// Merge into the previous undo group instead of starting a new one.
	pub chain: bool,
}

impl BufferChange {
	/// Builds the record for text inserted at `cursor_before`.
	pub fn insertion(text: impl Into<String>, cursor_before: Point, cursor_after: Point, chain: bool) -> Self {
		Self {
			kind: ChangeKind::Insertion,
			collapse_empty_line: true,
			text: text.into(),
			location: cursor_before,
			cursor_before,
			cursor_after,
			chain,
		}
	}

	/// Builds the record for text removed at `location`.
	pub fn deletion(text: impl Into<String>, location: Point, cursor_before: Point, cursor_after: Point, chain: bool) -> Self {
		Self {
			kind: ChangeKind::Deletion,
			collapse_empty_line: true,
			text: text.into(),
			location,
			cursor_before,
			cursor_after,
			chain,
		}
	}

	pub fn is_insertion(&self) -> bool {
		self.kind == ChangeKind::Insertion
	}
}
