use pretty_assertions::assert_eq;
use quill_buffer::{Buffer, RopeBuffer};
use quill_config::Options;
use quill_layout::View;
use quill_primitives::{BufferId, Key, KeyCode, Mode, Point, Rect};

use super::{KeyResult, Vim};
use crate::{Action, Edit, MotionRange, Parse};

fn setup(text: &str) -> (Vim, View, RopeBuffer, Options) {
	let options = Options::default();
	let mut view = View::new(BufferId(1));
	view.rect = Rect::new(0, 0, 80, 24);
	(Vim::new(&options), view, RopeBuffer::from_text(text), options)
}

fn feed(vim: &mut Vim, view: &mut View, buffer: &mut RopeBuffer, options: &Options, keys: &str) -> Vec<KeyResult> {
	keys.chars().map(|c| vim.handle_key(view, buffer, Key::char(c), options)).collect()
}

/// Removes the range between the motion's ends and leaves the cursor at its start.
fn cut(_: &Action, range: MotionRange, edit: &mut Edit<'_>) -> bool {
	let count = range.last.col - range.first.col;
	if edit.buffer.remove_string(range.first, count, false).is_err() {
		return false;
	}
	*edit.cursor = range.first;
	*edit.chain_undo = false;
	true
}

/// Moves `count` columns right on the line.
fn right(action: &Action, buffer: &dyn Buffer, cursor: Point) -> MotionRange {
	let col = (cursor.col + action.count()).min(buffer.line_len(cursor.row));
	MotionRange::new(cursor, Point::new(cursor.row, col))
}

/// Moves `count` columns left on the line.
fn left(action: &Action, _: &dyn Buffer, cursor: Point) -> MotionRange {
	MotionRange {
		first: cursor,
		last: Point::new(cursor.row, cursor.col.saturating_sub(action.count())),
	}
}

fn parse_cut(action: &mut Action) -> Parse {
	if action.verb.is_some() {
		return Parse::NotHandled;
	}
	action.verb = Some(cut);
	Parse::Continue
}

fn parse_right(action: &mut Action) -> Parse {
	action.motion = Some(right);
	Parse::Complete
}

fn parse_left(action: &mut Action) -> Parse {
	action.motion = Some(left);
	Parse::Complete
}

#[test]
fn starts_in_normal_mode() {
	let (vim, ..) = setup("");
	assert_eq!(vim.mode(), Mode::Normal);
	assert!(vim.pending().is_empty());
	assert!(!vim.chain_undo());
	assert_eq!(vim.key_binds().len(), 1);
}

#[test]
fn i_enters_insert_mode() {
	let (mut vim, mut view, mut buffer, options) = setup("text");
	assert_eq!(feed(&mut vim, &mut view, &mut buffer, &options, "i"), vec![KeyResult::Complete(true)]);
	assert_eq!(vim.mode(), Mode::Insert);
	assert!(vim.pending().is_empty());
}

#[test]
fn zero_padded_count_enters_insert_mode() {
	let (mut vim, mut view, mut buffer, options) = setup("");
	let results = feed(&mut vim, &mut view, &mut buffer, &options, "05i");
	assert_eq!(results, vec![KeyResult::Pending, KeyResult::Pending, KeyResult::Complete(true)]);
	assert_eq!(vim.mode(), Mode::Insert);
	assert!(vim.pending().is_empty());
}

#[test]
fn count_before_motion_overrides_count_before_verb() {
	let (mut vim, mut view, mut buffer, options) = setup("abcdefgh");
	vim.bind_key(Key::char('d'), parse_cut).unwrap();
	vim.bind_key(Key::char('l'), parse_right).unwrap();
	view.cursor = Point::new(0, 1);

	let results = feed(&mut vim, &mut view, &mut buffer, &options, "3d2l");
	assert_eq!(
		results,
		vec![
			KeyResult::Pending,
			KeyResult::Pending,
			KeyResult::Pending,
			KeyResult::Complete(true),
		]
	);
	assert_eq!(buffer.to_string(), "adefgh");
	assert_eq!(view.cursor, Point::new(0, 1));
	assert!(vim.pending().is_empty());
}

#[test]
fn backward_motion_range_is_ordered() {
	let (mut vim, mut view, mut buffer, options) = setup("abcdefgh");
	vim.bind_key(Key::char('d'), parse_cut).unwrap();
	vim.bind_key(Key::char('h'), parse_left).unwrap();
	view.cursor = Point::new(0, 5);

	feed(&mut vim, &mut view, &mut buffer, &options, "d3h");
	assert_eq!(buffer.to_string(), "abfgh");
	assert_eq!(view.cursor, Point::new(0, 2));
}

#[test]
fn motion_without_verb_reports_success() {
	let (mut vim, mut view, mut buffer, options) = setup("abc");
	vim.bind_key(Key::char('l'), parse_right).unwrap();
	assert_eq!(feed(&mut vim, &mut view, &mut buffer, &options, "l"), vec![KeyResult::Complete(true)]);
	assert_eq!(buffer.to_string(), "abc");
}

#[test]
fn failed_verb_still_completes() {
	let (mut vim, mut view, mut buffer, options) = setup("abc");
	vim.bind_key(Key::char('d'), parse_cut).unwrap();
	vim.bind_key(Key::char('l'), parse_right).unwrap();
	buffer.set_read_only(true);

	assert_eq!(feed(&mut vim, &mut view, &mut buffer, &options, "dl").last(), Some(&KeyResult::Complete(false)));
	assert!(vim.pending().is_empty());
	assert_eq!(vim.mode(), Mode::Normal);
}

#[test]
fn unmatched_keys_stay_pending_until_escape() {
	let (mut vim, mut view, mut buffer, options) = setup("");
	assert_eq!(feed(&mut vim, &mut view, &mut buffer, &options, "xi"), vec![KeyResult::Pending, KeyResult::Pending]);
	assert_eq!(vim.pending(), &[Key::char('x'), Key::char('i')]);
	assert_eq!(vim.mode(), Mode::Normal);

	let escape = Key::new(KeyCode::Esc);
	assert_eq!(vim.handle_key(&mut view, &mut buffer, escape, &options), KeyResult::Consumed);
	assert!(vim.pending().is_empty());
	assert_eq!(feed(&mut vim, &mut view, &mut buffer, &options, "i"), vec![KeyResult::Complete(true)]);
}

#[test]
fn pending_command_is_bounded() {
	let options = Options {
		max_command_len: 3,
		..Options::default()
	};
	let mut vim = Vim::new(&options);
	let mut view = View::new(BufferId(1));
	let mut buffer = RopeBuffer::new();

	feed(&mut vim, &mut view, &mut buffer, &options, "xyzw");
	assert_eq!(vim.pending(), &[Key::char('x'), Key::char('y'), Key::char('z')]);
}

#[test]
fn key_bind_capacity_comes_from_options() {
	let options = Options {
		max_key_binds: 2,
		..Options::default()
	};
	let mut vim = Vim::new(&options);
	vim.bind_key(Key::char('l'), parse_right).unwrap();
	assert!(vim.bind_key(Key::char('h'), parse_left).is_err());
}
