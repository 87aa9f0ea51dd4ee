//! Splitting the focused view of a tab.

use quill_primitives::{Rect, SplitDirection};
use tracing::debug;

use crate::tree::unexpected;
use crate::{Layout, LayoutError, LayoutId, List, Node, NodeKind, Result, View};

/// What the parent of the focused view requires before a sibling can be added.
enum SplitStep {
	/// The focused view is the bare tab root; wrap the root in a list.
	WrapRoot,
	/// The parent list runs the requested way; insert the sibling into it.
	Insert { parent: LayoutId },
	/// The parent list runs the other way; wrap the focused view in place.
	Wrap { parent: LayoutId, index: usize },
}

impl<D: Default> Layout<D> {
	/// Splits the focused view of `node` and returns the new view.
	///
	/// `node` is a tab, or a tab list whose current tab is split. The new view
	/// shows the same buffer at the same cursor and scroll and is placed first in
	/// its list. Focus does not move.
	///
	/// Everything the split needs is reserved up front, so on error the tree is
	/// unchanged.
	pub fn split(&mut self, node: LayoutId, direction: SplitDirection) -> Result<LayoutId> {
		let tab = match self.node(node) {
			Some(Node::Tab(_)) => node,
			Some(Node::TabList(list)) => list.current,
			Some(other) => return Err(unexpected(NodeKind::Tab, other.kind())),
			None => return Err(LayoutError::Stale(node)),
		};
		let current = self.tab(tab)?.current;
		if self.view(current).is_none() {
			return Err(unexpected(NodeKind::View, self.kind_of(current)?));
		}

		// At most one wrapping list and the new view.
		self.arena.reserve(2)?;

		loop {
			match self.split_step(tab, current, direction)? {
				SplitStep::Insert { parent } => return self.insert_sibling(parent, current),
				SplitStep::WrapRoot => {
					let list = self.new_list(current, direction)?;
					self.tab_mut(tab)?.root = list;
					debug!(%tab, %list, ?direction, "Wrapped tab root in list");
				}
				SplitStep::Wrap { parent, index } => {
					let list = self.new_list(current, direction)?;
					if let Node::List(parent_list) = self.node_mut(parent)? {
						parent_list.children[index] = list;
					}
					debug!(%parent, %list, ?direction, "Wrapped view in list");
				}
			}
		}
	}

	fn split_step(&self, tab: LayoutId, current: LayoutId, direction: SplitDirection) -> Result<SplitStep> {
		let parent = self.find_parent(tab, current).ok_or(LayoutError::NoParent(current))?;
		match self.node(parent) {
			Some(Node::Tab(_)) => Ok(SplitStep::WrapRoot),
			Some(Node::List(list)) if list.direction == direction => Ok(SplitStep::Insert { parent }),
			Some(Node::List(list)) => {
				let index = list.children.iter().position(|&c| c == current).ok_or(LayoutError::NoParent(current))?;
				Ok(SplitStep::Wrap { parent, index })
			}
			Some(other) => Err(unexpected(NodeKind::List, other.kind())),
			None => Err(LayoutError::Stale(parent)),
		}
	}

	/// Creates a single-child list with room for the sibling that follows.
	fn new_list(&mut self, child: LayoutId, direction: SplitDirection) -> Result<LayoutId> {
		let mut children = Vec::new();
		children.try_reserve_exact(2)?;
		children.push(child);
		Ok(self.arena.insert(Node::List(List {
			children,
			direction,
			rect: Rect::default(),
		})))
	}

	fn insert_sibling(&mut self, parent: LayoutId, current: LayoutId) -> Result<LayoutId> {
		let Some(source) = self.view(current) else {
			return Err(unexpected(NodeKind::View, self.kind_of(current)?));
		};
		let mut view = View::new(source.buffer);
		view.cursor = source.cursor;
		view.scroll = source.scroll;

		if let Node::List(list) = self.node_mut(parent)? {
			list.children.try_reserve(1)?;
		}
		let new = self.arena.insert(Node::View(view));
		if let Node::List(list) = self.node_mut(parent)? {
			list.children.insert(0, new);
			debug!(%parent, %new, children = list.children.len(), "Split view");
		}
		Ok(new)
	}
}

#[cfg(test)]
mod tests;
