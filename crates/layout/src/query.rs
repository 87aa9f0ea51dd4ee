//! Lookups by screen position, identity and buffer.

use quill_primitives::{BufferId, Position};

use crate::{Layout, LayoutId, Node};

impl<D> Layout<D> {
	/// Finds the view whose rect contains `pos`.
	///
	/// Tab lists only search their current tab, since only it is laid out.
	pub fn find_at(&self, node: LayoutId, pos: Position) -> Option<LayoutId> {
		match self.node(node)? {
			Node::View(view) => view.rect.contains(pos).then_some(node),
			Node::List(list) => list.children.iter().find_map(|&child| self.find_at(child, pos)),
			Node::Tab(tab) => self.find_at(tab.root, pos),
			Node::TabList(list) => self.find_at(list.current, pos),
		}
	}

	/// Returns the node that directly owns `target` somewhere under `root`.
	///
	/// Returns `None` when `target` is `root` itself or is not reachable from it.
	/// This is the only way ancestry is recovered; nodes keep no parent links.
	pub fn find_parent(&self, root: LayoutId, target: LayoutId) -> Option<LayoutId> {
		for &child in self.node(root)?.children() {
			if child == target {
				return Some(root);
			}
			if let Some(found) = self.find_parent(child, target) {
				return Some(found);
			}
		}
		None
	}

	/// Returns true if `target` is `root` or lies under it.
	pub fn contains(&self, root: LayoutId, target: LayoutId) -> bool {
		root == target || self.find_parent(root, target).is_some()
	}

	/// Returns the first buffer shown under `node`, depth first.
	pub fn find_buffer(&self, node: LayoutId) -> Option<BufferId> {
		match self.node(node)? {
			Node::View(view) => Some(view.buffer),
			other => other.children().iter().find_map(|&child| self.find_buffer(child)),
		}
	}

	/// Returns the first visible view showing `buffer`.
	pub fn buffer_in_view(&self, node: LayoutId, buffer: BufferId) -> Option<LayoutId> {
		match self.node(node)? {
			Node::View(view) => (view.buffer == buffer).then_some(node),
			Node::List(list) => list.children.iter().find_map(|&child| self.buffer_in_view(child, buffer)),
			Node::Tab(tab) => self.buffer_in_view(tab.root, buffer),
			Node::TabList(list) => self.buffer_in_view(list.current, buffer),
		}
	}

	/// Returns every visible view showing `buffer`, in layout order.
	///
	/// The buffer layer runs this after an edit so every view mirroring the
	/// buffer can have its cursor and scroll brought back in range.
	pub fn buffer_in_views(&self, node: LayoutId, buffer: BufferId) -> Vec<LayoutId> {
		self.views(node)
			.into_iter()
			.filter(|&id| self.view(id).is_some_and(|view| view.buffer == buffer))
			.collect()
	}

	/// Returns the visible views under `node`, in layout order.
	pub fn views(&self, node: LayoutId) -> Vec<LayoutId> {
		let mut out = Vec::new();
		self.collect_views(node, &mut out);
		out
	}

	fn collect_views(&self, node: LayoutId, out: &mut Vec<LayoutId>) {
		match self.node(node) {
			Some(Node::View(_)) => out.push(node),
			Some(Node::List(list)) => {
				for &child in &list.children {
					self.collect_views(child, out);
				}
			}
			Some(Node::Tab(tab)) => self.collect_views(tab.root, out),
			Some(Node::TabList(list)) => self.collect_views(list.current, out),
			None => {}
		}
	}

	/// Counts the views under a tab. Containers are not counted.
	///
	/// Returns 0 for anything that is not a tab.
	pub fn tab_layout_count(&self, tab: LayoutId) -> usize {
		match self.node(tab) {
			Some(Node::Tab(tab)) => self.count_views(tab.root),
			_ => 0,
		}
	}

	fn count_views(&self, node: LayoutId) -> usize {
		match self.node(node) {
			Some(Node::View(_)) => 1,
			Some(Node::List(list)) => list.children.iter().map(|&child| self.count_views(child)).sum(),
			_ => 0,
		}
	}
}
