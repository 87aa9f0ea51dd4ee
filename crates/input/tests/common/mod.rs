use quill_buffer::{Buffer, BufferChange, Result, RopeBuffer};
use quill_config::Options;
use quill_input::{KeyResult, Vim};
use quill_layout::View;
use quill_primitives::{Key, Point};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

/// A [`RopeBuffer`] that also keeps every change it is handed.
#[derive(Default)]
pub struct Recording {
	pub inner: RopeBuffer,
	pub changes: Vec<BufferChange>,
}

impl Recording {
	pub fn new(text: &str) -> Self {
		Self {
			inner: RopeBuffer::from_text(text),
			changes: Vec::new(),
		}
	}

	pub fn chains(&self) -> Vec<bool> {
		self.changes.iter().map(|c| c.chain).collect()
	}
}

impl Buffer for Recording {
	fn line_count(&self) -> usize {
		self.inner.line_count()
	}

	fn line_len(&self, row: usize) -> usize {
		self.inner.line_len(row)
	}

	fn insert_char(&mut self, ch: char, at: Point) -> Result<()> {
		self.inner.insert_char(ch, at)
	}

	fn remove_string(&mut self, at: Point, count: usize, collapse_empty_line: bool) -> Result<()> {
		self.inner.remove_string(at, count, collapse_empty_line)
	}

	fn dupe_string(&self, at: Point, count: usize) -> Option<String> {
		self.inner.dupe_string(at, count)
	}

	fn advance_point(&self, at: Point, delta: isize) -> Point {
		self.inner.advance_point(at, delta)
	}

	fn move_point(&self, at: Point, delta: (isize, isize), tab_width: usize, clamp: bool) -> Point {
		self.inner.move_point(at, delta, tab_width, clamp)
	}

	fn visible_column(&self, at: Point, tab_width: usize) -> usize {
		self.inner.visible_column(at, tab_width)
	}

	fn apply_change(&mut self, change: BufferChange) {
		self.changes.push(change.clone());
		self.inner.apply_change(change);
	}
}

pub fn press<D>(vim: &mut Vim, view: &mut View<D>, buffer: &mut dyn Buffer, options: &Options, keys: impl IntoIterator<Item = Key>) -> Vec<KeyResult> {
	keys.into_iter().map(|key| vim.handle_key(view, buffer, key, options)).collect()
}
