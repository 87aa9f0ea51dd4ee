//! The layout tree and its construction.

use quill_primitives::{BufferId, Rect};
use tracing::{debug, warn};

use crate::arena::Arena;
use crate::{LayoutError, LayoutId, List, Node, NodeKind, Result, Tab, TabList, View};

/// Owner of every layout node.
///
/// `D` is the per-view auxiliary state; each [`View`] owns one `D`.
pub struct Layout<D = ()> {
	pub(crate) arena: Arena<D>,
	root: LayoutId,
}

impl<D: Default> Layout<D> {
	/// Creates a tab list holding one tab that shows `buffer`.
	pub fn new(buffer: BufferId) -> Result<Self> {
		let mut arena = Arena::new();
		arena.reserve(3)?;
		let mut layout = Self {
			arena,
			// Placeholder until the tab list below is inserted.
			root: LayoutId { idx: 0, generation: 0 },
		};
		let tab = layout.new_tab(buffer)?;
		layout.root = match layout.new_tab_list(tab) {
			Ok(root) => root,
			Err(err) => {
				layout.free(tab);
				return Err(err);
			}
		};
		Ok(layout)
	}

	/// Creates a detached view over `buffer`.
	pub fn new_view(&mut self, buffer: BufferId) -> Result<LayoutId> {
		self.arena.reserve(1)?;
		Ok(self.arena.insert(Node::View(View::new(buffer))))
	}

	/// Creates a detached tab whose root and focused view is a new view over `buffer`.
	///
	/// Both nodes are reserved before either is created, so a failure leaves
	/// nothing behind.
	pub fn new_tab(&mut self, buffer: BufferId) -> Result<LayoutId> {
		self.arena.reserve(2)?;
		let view = self.arena.insert(Node::View(View::new(buffer)));
		Ok(self.arena.insert(Node::Tab(Tab {
			root: view,
			current: view,
			rect: Rect::default(),
		})))
	}

	/// Appends a tab showing the buffer of the focused view of the current tab.
	///
	/// The new tab is returned but not made current.
	pub fn add_tab(&mut self, tab_list: LayoutId) -> Result<LayoutId> {
		let current_tab = self.tab_list(tab_list)?.current;
		let focused = self.tab(current_tab)?.current;
		let buffer = self.find_buffer(focused).ok_or(LayoutError::UnexpectedNode {
			expected: NodeKind::View,
			found: self.kind_of(focused)?,
		})?;

		if let Node::TabList(list) = self.node_mut(tab_list)? {
			list.tabs.try_reserve(1)?;
		}
		let tab = self.new_tab(buffer)?;
		if let Node::TabList(list) = self.node_mut(tab_list)? {
			list.tabs.push(tab);
			debug!(%tab, %buffer, tabs = list.tabs.len(), "Added tab");
		}
		Ok(tab)
	}
}

impl<D> Layout<D> {
	/// Wraps a detached tab in a new tab list.
	pub fn new_tab_list(&mut self, tab: LayoutId) -> Result<LayoutId> {
		self.tab(tab)?;
		let mut tabs = Vec::new();
		tabs.try_reserve_exact(1)?;
		tabs.push(tab);
		self.arena.reserve(1)?;
		Ok(self.arena.insert(Node::TabList(TabList {
			tabs,
			current: tab,
			rect: Rect::default(),
		})))
	}

	/// The tab list at the top of the tree.
	pub fn root(&self) -> LayoutId {
		self.root
	}

	/// Number of live nodes, attached or not.
	pub fn node_count(&self) -> usize {
		self.arena.len()
	}

	pub fn node(&self, id: LayoutId) -> Option<&Node<D>> {
		self.arena.get(id)
	}

	pub fn view(&self, id: LayoutId) -> Option<&View<D>> {
		match self.arena.get(id)? {
			Node::View(view) => Some(view),
			_ => None,
		}
	}

	pub fn view_mut(&mut self, id: LayoutId) -> Option<&mut View<D>> {
		match self.arena.get_mut(id)? {
			Node::View(view) => Some(view),
			_ => None,
		}
	}

	/// The active tab of the root tab list.
	pub fn current_tab(&self) -> LayoutId {
		match self.arena.get(self.root) {
			Some(Node::TabList(list)) => list.current,
			_ => self.root,
		}
	}

	/// The focused view of the active tab.
	pub fn current_view(&self) -> Option<LayoutId> {
		match self.arena.get(self.current_tab())? {
			Node::Tab(tab) => self.view(tab.current).map(|_| tab.current),
			_ => None,
		}
	}

	pub fn current_view_mut(&mut self) -> Option<&mut View<D>> {
		let id = self.current_view()?;
		self.view_mut(id)
	}

	/// Frees `id` and everything it owns.
	///
	/// The caller must have detached `id` from its parent first.
	pub fn free(&mut self, id: LayoutId) {
		if let Some(node) = self.arena.remove(id) {
			for &child in node.children() {
				self.free(child);
			}
		}
	}

	pub(crate) fn node_mut(&mut self, id: LayoutId) -> Result<&mut Node<D>> {
		self.arena.get_mut(id).ok_or(LayoutError::Stale(id))
	}

	pub(crate) fn kind_of(&self, id: LayoutId) -> Result<NodeKind> {
		self.arena.get(id).map(Node::kind).ok_or(LayoutError::Stale(id))
	}

	pub(crate) fn tab(&self, id: LayoutId) -> Result<&Tab> {
		match self.arena.get(id) {
			Some(Node::Tab(tab)) => Ok(tab),
			Some(other) => Err(unexpected(NodeKind::Tab, other.kind())),
			None => Err(LayoutError::Stale(id)),
		}
	}

	pub(crate) fn tab_mut(&mut self, id: LayoutId) -> Result<&mut Tab> {
		match self.arena.get_mut(id) {
			Some(Node::Tab(tab)) => Ok(tab),
			Some(other) => Err(unexpected(NodeKind::Tab, other.kind())),
			None => Err(LayoutError::Stale(id)),
		}
	}

	pub(crate) fn tab_list(&self, id: LayoutId) -> Result<&TabList> {
		match self.arena.get(id) {
			Some(Node::TabList(list)) => Ok(list),
			Some(other) => Err(unexpected(NodeKind::TabList, other.kind())),
			None => Err(LayoutError::Stale(id)),
		}
	}

	pub(crate) fn tab_list_mut(&mut self, id: LayoutId) -> Result<&mut TabList> {
		match self.arena.get_mut(id) {
			Some(Node::TabList(list)) => Ok(list),
			Some(other) => Err(unexpected(NodeKind::TabList, other.kind())),
			None => Err(LayoutError::Stale(id)),
		}
	}

	pub(crate) fn list(&self, id: LayoutId) -> Option<&List> {
		match self.arena.get(id)? {
			Node::List(list) => Some(list),
			_ => None,
		}
	}
}

/// Builds the wrong-variant error. Reaching this is a caller bug, so it is logged.
pub(crate) fn unexpected(expected: NodeKind, found: NodeKind) -> LayoutError {
	warn!(%expected, %found, "Layout operation invoked on the wrong node kind");
	LayoutError::UnexpectedNode { expected, found }
}
