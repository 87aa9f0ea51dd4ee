//! Node removal with cascading and focus repair.

use tracing::debug;

use crate::tree::unexpected;
use crate::{Layout, LayoutError, LayoutId, Node, NodeKind, Result};

impl<D> Layout<D> {
	/// Removes `node` from the tree under `root` and frees it.
	///
	/// - Under a list, the node is removed keeping sibling order. A list left
	///   empty is removed from its own parent in turn.
	/// - Under a tab list, the tab is removed keeping order. Refusing to remove
	///   the last tab is up to the caller; see [`Layout::close_tab`].
	/// - Under a tab, nothing is removed and the call still succeeds: a tab's
	///   root is only ever replaced, never deleted. A cascade that empties a
	///   tab's root list therefore stops there and leaves the empty list as root.
	///
	/// Afterwards every tab and tab list under `root` whose focus no longer
	/// resolves is refocused.
	pub fn delete(&mut self, root: LayoutId, node: LayoutId) -> Result<()> {
		self.detach(root, node)?;
		self.repair_focus(root);
		Ok(())
	}

	fn detach(&mut self, root: LayoutId, node: LayoutId) -> Result<()> {
		let parent = self.find_parent(root, node).ok_or(LayoutError::NoParent(node))?;
		match self.node_mut(parent)? {
			Node::List(list) => {
				let index = list.children.iter().position(|&c| c == node).ok_or(LayoutError::NoParent(node))?;
				list.children.remove(index);
				let emptied = list.children.is_empty();
				self.free(node);
				debug!(%node, %parent, emptied, "Deleted from list");
				if emptied {
					return self.detach(root, parent);
				}
			}
			Node::TabList(list) => {
				let index = list.tabs.iter().position(|&t| t == node).ok_or(LayoutError::NoParent(node))?;
				list.tabs.remove(index);
				if list.current == node
					&& let Some(&next) = list.tabs.get(index).or(list.tabs.last())
				{
					list.current = next;
				}
				self.free(node);
				debug!(%node, %parent, "Deleted tab");
			}
			Node::Tab(_) => {
				debug!(%node, tab = %parent, "Delete under tab root is a no-op");
			}
			Node::View(_) => return Err(unexpected(NodeKind::List, NodeKind::View)),
		}
		Ok(())
	}

	/// Points every tab under `root` whose focus was freed at its first view,
	/// or at its root when it has none left.
	fn repair_focus(&mut self, root: LayoutId) {
		let mut tabs = Vec::new();
		self.collect_tabs(root, &mut tabs);
		for tab in tabs {
			let Some(Node::Tab(t)) = self.node(tab) else {
				continue;
			};
			let (tab_root, current) = (t.root, t.current);
			if self.view(current).is_some() && self.contains(tab_root, current) {
				continue;
			}
			let focus = self.views(tab_root).first().copied().unwrap_or(tab_root);
			if let Ok(t) = self.tab_mut(tab) {
				t.current = focus;
				debug!(%tab, %focus, "Refocused tab");
			}
		}
	}

	fn collect_tabs(&self, node: LayoutId, out: &mut Vec<LayoutId>) {
		match self.node(node) {
			Some(Node::Tab(_)) => out.push(node),
			Some(Node::TabList(list)) => out.extend(list.tabs.iter().copied()),
			_ => {}
		}
	}

	/// Closes `view` in `tab`, moving focus to a neighbour if it had focus.
	///
	/// Returns the focused view afterwards. The last view of a tab cannot be
	/// closed; close the tab instead.
	pub fn close_view(&mut self, tab: LayoutId, view: LayoutId) -> Result<LayoutId> {
		let current = self.tab(tab)?.current;
		let views = self.views(tab);
		let index = views.iter().position(|&v| v == view).ok_or(LayoutError::NoParent(view))?;
		if views.len() <= 1 {
			return Err(LayoutError::LastView);
		}
		let neighbour = if index + 1 < views.len() { views[index + 1] } else { views[index - 1] };

		self.delete(tab, view)?;
		if current == view {
			self.tab_mut(tab)?.current = neighbour;
		}
		Ok(self.tab(tab)?.current)
	}

	/// Closes `tab`, refusing to close the last one.
	///
	/// Returns the tab that is current afterwards.
	pub fn close_tab(&mut self, tab_list: LayoutId, tab: LayoutId) -> Result<LayoutId> {
		let list = self.tab_list(tab_list)?;
		if !list.tabs.contains(&tab) {
			return Err(LayoutError::NoParent(tab));
		}
		if list.tabs.len() <= 1 {
			return Err(LayoutError::LastTab);
		}
		self.delete(tab_list, tab)?;
		Ok(self.tab_list(tab_list)?.current)
	}
}
