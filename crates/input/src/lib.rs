//! Modal command engine.
//!
//! - [`Vim`] - mode tracking, the pending normal-mode command and insert-mode editing
//! - [`KeyBinds`] - keystroke to parse-capability table
//! - [`Action`] - a parsed `[count] verb [count] motion` command
//! - [`KeyResult`] - what a key did, for the host to react to

mod action;
mod binds;
mod error;
mod insert;
mod parser;
mod vim;

pub use action::{Action, Edit, Motion, MotionRange, Parse, ParseFn, Verb, parse_insert_mode};
pub use binds::{KeyBind, KeyBinds};
pub use error::InputError;
pub use parser::parse_action;
pub use quill_primitives::Mode;
pub use vim::{KeyResult, Vim};
