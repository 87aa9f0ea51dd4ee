use thiserror::Error;

/// Errors from configuring the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
	/// The key-bind table is at capacity and `key` is not already bound.
	#[error("key-bind table is full ({capacity} binds)")]
	KeyBindsFull { capacity: usize },
}
