//! Normal-mode command grammar: `[count] verb [count] motion`.

use quill_primitives::Key;
use tracing::trace;

use crate::{Action, KeyBinds, Parse};

/// Where the parser is within a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
	AwaitingVerb,
	AwaitingMotion,
	Complete,
}

/// Parses `keys` into an action using `binds`.
///
/// Returns `None` while the command is incomplete: input ran out, or a key
/// has no capability that handles it at this point. The keys stay pending in
/// both cases.
pub fn parse_action(keys: &[Key], binds: &KeyBinds) -> Option<Action> {
	let mut action = Action::default();
	let mut state = State::AwaitingVerb;
	let mut rest = keys;

	loop {
		if state == State::Complete {
			trace!(?action, "Parsed action");
			return Some(action);
		}

		let (count, after_count) = take_count(rest);
		if count.is_some() {
			action.multiplier = count;
		}
		let (&key, after_key) = after_count.split_first()?;

		state = match (state, binds.dispatch(key, &mut action)) {
			(_, Parse::Complete) => State::Complete,
			(State::AwaitingVerb, Parse::Continue) => State::AwaitingMotion,
			(_, Parse::NotHandled) | (_, Parse::Continue) => {
				trace!(?key, ?state, "Key left pending");
				return None;
			}
		};
		rest = after_key;
	}
}

/// Splits a leading run of decimal digits off `keys` as a count.
fn take_count(keys: &[Key]) -> (Option<usize>, &[Key]) {
	let mut count: Option<usize> = None;
	let mut used = 0;
	for key in keys {
		let Some(digit) = key.as_digit() else {
			break;
		};
		count = Some(count.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
		used += 1;
	}
	(count, &keys[used..])
}
