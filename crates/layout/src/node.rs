//! Layout node variants.

use quill_primitives::{BufferId, Point, Rect, SplitDirection};

use crate::LayoutId;

/// The kind of a layout node, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	View,
	List,
	Tab,
	TabList,
}

impl std::fmt::Display for NodeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			NodeKind::View => "view",
			NodeKind::List => "list",
			NodeKind::Tab => "tab",
			NodeKind::TabList => "tab list",
		})
	}
}

/// A node in the layout tree. The variant of a node never changes.
#[derive(Debug, Clone)]
pub enum Node<D = ()> {
	View(View<D>),
	List(List),
	Tab(Tab),
	TabList(TabList),
}

impl<D> Node<D> {
	pub fn kind(&self) -> NodeKind {
		match self {
			Node::View(_) => NodeKind::View,
			Node::List(_) => NodeKind::List,
			Node::Tab(_) => NodeKind::Tab,
			Node::TabList(_) => NodeKind::TabList,
		}
	}

	/// The rect assigned by the last geometry pass.
	pub fn rect(&self) -> Rect {
		match self {
			Node::View(view) => view.rect,
			Node::List(list) => list.rect,
			Node::Tab(tab) => tab.rect,
			Node::TabList(tab_list) => tab_list.rect,
		}
	}

	/// The nodes this node owns, in order.
	pub fn children(&self) -> &[LayoutId] {
		match self {
			Node::View(_) => &[],
			Node::List(list) => &list.children,
			Node::Tab(tab) => std::slice::from_ref(&tab.root),
			Node::TabList(tab_list) => &tab_list.tabs,
		}
	}
}

/// A window onto a buffer.
///
/// `scroll` is the top-left visible position: `row` is a line index and `col`
/// a display column. `data` is per-view state owned by the host.
#[derive(Debug, Clone, Default)]
pub struct View<D = ()> {
	pub buffer: BufferId,
	pub cursor: Point,
	pub scroll: Point,
	pub rect: Rect,
	pub data: D,
}

impl<D: Default> View<D> {
	pub fn new(buffer: BufferId) -> Self {
		Self {
			buffer,
			cursor: Point::ORIGIN,
			scroll: Point::ORIGIN,
			rect: Rect::default(),
			data: D::default(),
		}
	}
}

/// Children laid out along one direction, in visual order.
#[derive(Debug, Clone)]
pub struct List {
	pub(crate) children: Vec<LayoutId>,
	pub(crate) direction: SplitDirection,
	pub(crate) rect: Rect,
}

impl List {
	pub fn children(&self) -> &[LayoutId] {
		&self.children
	}

	pub fn direction(&self) -> SplitDirection {
		self.direction
	}

	pub fn rect(&self) -> Rect {
		self.rect
	}
}

/// One independent arrangement of views.
#[derive(Debug, Clone)]
pub struct Tab {
	pub(crate) root: LayoutId,
	pub(crate) current: LayoutId,
	pub(crate) rect: Rect,
}

impl Tab {
	pub fn root(&self) -> LayoutId {
		self.root
	}

	/// The focused view.
	pub fn current(&self) -> LayoutId {
		self.current
	}

	pub fn rect(&self) -> Rect {
		self.rect
	}
}

/// The open tabs and the active one.
#[derive(Debug, Clone)]
pub struct TabList {
	pub(crate) tabs: Vec<LayoutId>,
	pub(crate) current: LayoutId,
	pub(crate) rect: Rect,
}

impl TabList {
	pub fn tabs(&self) -> &[LayoutId] {
		&self.tabs
	}

	/// The active tab.
	pub fn current(&self) -> LayoutId {
		self.current
	}

	pub fn rect(&self) -> Rect {
		self.rect
	}
}
