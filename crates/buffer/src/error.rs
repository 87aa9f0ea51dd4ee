use quill_primitives::Point;
use thiserror::Error;

/// Reasons a buffer refuses an edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
	/// The point lies past the end of its line or past the last line.
	#[error("point {0} is outside the buffer")]
	OutOfBounds(Point),

	/// The removal would run past the end of the buffer or across a line break
	/// without `collapse_empty_line`.
	#[error("cannot remove {count} characters at {at}")]
	InvalidRemoval { at: Point, count: usize },

	/// The buffer does not accept edits.
	#[error("buffer is read-only")]
	ReadOnly,
}

/// Result type for buffer edits.
pub type Result<T> = std::result::Result<T, BufferError>;
