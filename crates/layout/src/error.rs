use std::collections::TryReserveError;

use thiserror::Error;

use crate::{LayoutId, NodeKind};

/// Errors returned by layout mutations.
///
/// A mutation that fails leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
	/// Node storage or a child list could not grow.
	#[error("layout allocation failed: {0}")]
	Allocation(#[from] TryReserveError),

	/// The operation was invoked on the wrong kind of node.
	#[error("expected a {expected} node, found a {found}")]
	UnexpectedNode { expected: NodeKind, found: NodeKind },

	/// The node has no parent under the given root.
	#[error("{0} has no parent under this root")]
	NoParent(LayoutId),

	/// The id refers to a node that has been freed.
	#[error("{0} does not refer to a live node")]
	Stale(LayoutId),

	/// A tab list must keep at least one tab.
	#[error("cannot close the last tab")]
	LastTab,

	/// A tab must keep at least one view.
	#[error("cannot close the last view of a tab")]
	LastView,
}

/// Result type for layout mutations.
pub type Result<T> = std::result::Result<T, LayoutError>;
