//! Parsed commands and the capability types they carry.

use quill_buffer::Buffer;
use quill_primitives::{Mode, Point};

/// Outcome of offering a key to a parse-capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
	/// The action is fully resolved.
	Complete,
	/// The key was taken but the action needs more, typically a motion.
	Continue,
	/// This capability does not apply to the action as built so far.
	NotHandled,
}

/// Binds a keystroke's meaning into the action being parsed.
pub type ParseFn = fn(&mut Action) -> Parse;

/// Computes the range a motion covers from `cursor`.
pub type Motion = fn(&Action, &dyn Buffer, Point) -> MotionRange;

/// Applies an edit over an ordered range. Returns false if the buffer refused it.
pub type Verb = fn(&Action, MotionRange, &mut Edit<'_>) -> bool;

/// The state a verb may change.
pub struct Edit<'a> {
	pub buffer: &'a mut dyn Buffer,
	pub cursor: &'a mut Point,
	/// Set when the verb's changes should join the previous undo group.
	pub chain_undo: &'a mut bool,
}

/// Two points bounding a motion, ordered once the motion has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionRange {
	pub first: Point,
	pub last: Point,
}

impl MotionRange {
	/// The range between `a` and `b`, earlier point first.
	pub fn new(a: Point, b: Point) -> Self {
		let (first, last) = Point::ordered(a, b);
		Self { first, last }
	}

	/// Zero-width range at `at`, used when an action has no motion.
	pub fn at(at: Point) -> Self {
		Self { first: at, last: at }
	}

	pub fn is_empty(&self) -> bool {
		self.first == self.last
	}
}

/// A command built from `[count] verb [count] motion`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Action {
	pub verb: Option<Verb>,
	pub motion: Option<Motion>,
	/// The last count typed; a count before the motion replaces one before the verb.
	pub multiplier: Option<usize>,
	/// Mode the engine enters once the action is applied.
	pub end_mode: Mode,
}

impl Action {
	/// Repeat count, 1 when none was typed.
	pub fn count(&self) -> usize {
		self.multiplier.unwrap_or(1)
	}
}

/// Enters insert mode. Only valid as the whole command, never as a verb's motion.
pub fn parse_insert_mode(action: &mut Action) -> Parse {
	if action.verb.is_some() || action.motion.is_some() {
		return Parse::NotHandled;
	}
	action.end_mode = Mode::Insert;
	Parse::Complete
}
