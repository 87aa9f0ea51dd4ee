//! Grapheme cluster stepping over rope text.
//!
//! Cursor movement advances by user-perceived characters, so a base letter and
//! its combining marks, a flag's two regional indicators, or a joined emoji
//! sequence are stepped over together. Boundaries are found with a
//! [`GraphemeCursor`] fed the rope's chunks, so a cluster is seen whole even
//! when it spans chunks.

use ropey::RopeSlice;
use ropey::str_utils::byte_to_char_idx;
use unicode_segmentation::{GraphemeCursor, GraphemeIncomplete};

/// Returns whether `char_idx` sits between two grapheme clusters.
///
/// The start and end of the text are always boundaries.
pub fn is_boundary(text: RopeSlice, char_idx: usize) -> bool {
	if char_idx == 0 || char_idx >= text.len_chars() {
		return true;
	}

	let byte_idx = text.char_to_byte(char_idx);
	let (chunk, chunk_byte_idx, _, _) = text.chunk_at_byte(byte_idx);
	let mut cursor = GraphemeCursor::new(byte_idx, text.len_bytes(), true);
	loop {
		match cursor.is_boundary(chunk, chunk_byte_idx) {
			Ok(boundary) => return boundary,
			Err(GraphemeIncomplete::PreContext(n)) => provide_context(&mut cursor, text, n),
			Err(_) => return true,
		}
	}
}

/// Returns the first boundary after `char_idx`, or the text length.
pub fn next_boundary(text: RopeSlice, char_idx: usize) -> usize {
	let len = text.len_chars();
	if char_idx >= len {
		return len;
	}

	let byte_idx = text.char_to_byte(char_idx);
	let (mut chunk, mut chunk_byte_idx, mut chunk_char_idx, _) = text.chunk_at_byte(byte_idx);
	let mut cursor = GraphemeCursor::new(byte_idx, text.len_bytes(), true);
	loop {
		match cursor.next_boundary(chunk, chunk_byte_idx) {
			Ok(None) => return len,
			Ok(Some(n)) => return chunk_char_idx + byte_to_char_idx(chunk, n - chunk_byte_idx),
			Err(GraphemeIncomplete::NextChunk) => {
				chunk_byte_idx += chunk.len();
				(chunk, _, chunk_char_idx, _) = text.chunk_at_byte(chunk_byte_idx);
			}
			Err(GraphemeIncomplete::PreContext(n)) => provide_context(&mut cursor, text, n),
			Err(_) => return char_idx + 1,
		}
	}
}

/// Returns the last boundary before `char_idx`, or 0.
pub fn prev_boundary(text: RopeSlice, char_idx: usize) -> usize {
	let char_idx = char_idx.min(text.len_chars());
	if char_idx == 0 {
		return 0;
	}

	let byte_idx = text.char_to_byte(char_idx);
	let (mut chunk, mut chunk_byte_idx, mut chunk_char_idx, _) = text.chunk_at_byte(byte_idx);
	let mut cursor = GraphemeCursor::new(byte_idx, text.len_bytes(), true);
	loop {
		match cursor.prev_boundary(chunk, chunk_byte_idx) {
			Ok(None) => return 0,
			Ok(Some(n)) => return chunk_char_idx + byte_to_char_idx(chunk, n - chunk_byte_idx),
			Err(GraphemeIncomplete::PrevChunk) => {
				(chunk, chunk_byte_idx, chunk_char_idx, _) = text.chunk_at_byte(chunk_byte_idx - 1);
			}
			Err(GraphemeIncomplete::PreContext(n)) => provide_context(&mut cursor, text, n),
			Err(_) => return char_idx - 1,
		}
	}
}

/// Hands the cursor the chunk ending at byte `end`.
fn provide_context(cursor: &mut GraphemeCursor, text: RopeSlice, end: usize) {
	let (chunk, chunk_byte_idx, _, _) = text.chunk_at_byte(end - 1);
	cursor.provide_context(chunk, chunk_byte_idx);
}

/// Steps `count` clusters from `char_idx`, forward for positive counts.
pub fn step(text: RopeSlice, char_idx: usize, count: isize) -> usize {
	let mut idx = char_idx.min(text.len_chars());
	for _ in 0..count.unsigned_abs() {
		idx = if count > 0 {
			next_boundary(text, idx)
		} else {
			prev_boundary(text, idx)
		};
	}
	idx
}
