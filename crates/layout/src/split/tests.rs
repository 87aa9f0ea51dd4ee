use pretty_assertions::assert_eq;
use quill_primitives::{BufferId, Point, SplitDirection};

use crate::{Layout, LayoutError, Node, NodeKind};

fn tab_root(layout: &Layout) -> crate::LayoutId {
	match layout.node(layout.current_tab()) {
		Some(Node::Tab(tab)) => tab.root(),
		other => panic!("current tab missing: {other:?}"),
	}
}

#[test]
fn first_split_wraps_root_and_keeps_focus() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let tab = layout.current_tab();
	let original = layout.current_view().unwrap();

	let new = layout.split(tab, SplitDirection::Vertical).unwrap();
	let root = tab_root(&layout);
	let Some(Node::List(list)) = layout.node(root) else {
		panic!("tab root should be a list");
	};
	assert_eq!(list.direction(), SplitDirection::Vertical);
	assert_eq!(list.children(), &[new, original]);
	assert_eq!(layout.current_view(), Some(original));
	assert_eq!(layout.tab_layout_count(tab), 2);
}

#[test]
fn split_copies_buffer_cursor_and_scroll() {
	let mut layout: Layout = Layout::new(BufferId(4)).unwrap();
	let tab = layout.current_tab();
	{
		let view = layout.current_view_mut().unwrap();
		view.cursor = Point::new(12, 3);
		view.scroll = Point::new(8, 0);
	}
	let new = layout.split(tab, SplitDirection::Horizontal).unwrap();
	let view = layout.view(new).unwrap();
	assert_eq!(view.buffer, BufferId(4));
	assert_eq!(view.cursor, Point::new(12, 3));
	assert_eq!(view.scroll, Point::new(8, 0));
}

#[test]
fn same_direction_inserts_into_existing_list() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let tab = layout.current_tab();
	let original = layout.current_view().unwrap();
	let first = layout.split(tab, SplitDirection::Horizontal).unwrap();
	let list = tab_root(&layout);
	let second = layout.split(tab, SplitDirection::Horizontal).unwrap();

	assert_eq!(tab_root(&layout), list);
	let Some(Node::List(list)) = layout.node(list) else {
		panic!("tab root should still be a list");
	};
	assert_eq!(list.children(), &[second, first, original]);
}

#[test]
fn opposite_direction_wraps_focused_view_in_place() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let tab = layout.current_tab();
	let original = layout.current_view().unwrap();
	let above = layout.split(tab, SplitDirection::Vertical).unwrap();
	let beside = layout.split(tab, SplitDirection::Horizontal).unwrap();

	let root = tab_root(&layout);
	let Some(Node::List(outer)) = layout.node(root) else {
		panic!("tab root should be a list");
	};
	assert_eq!(outer.children().len(), 2);
	assert_eq!(outer.children()[0], above);
	let inner = outer.children()[1];
	let Some(Node::List(inner)) = layout.node(inner) else {
		panic!("focused view should have been wrapped");
	};
	assert_eq!(inner.direction(), SplitDirection::Horizontal);
	assert_eq!(inner.children(), &[beside, original]);
	assert_eq!(layout.views(tab), vec![above, beside, original]);
	assert_eq!(layout.node_count(), 7);
}

#[test]
fn tab_list_splits_its_current_tab() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let other = layout.add_tab(layout.root()).unwrap();
	layout.split(layout.root(), SplitDirection::Vertical).unwrap();

	assert_eq!(layout.tab_layout_count(layout.current_tab()), 2);
	assert_eq!(layout.tab_layout_count(other), 1);
}

#[test]
fn splitting_a_view_or_list_is_rejected() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let tab = layout.current_tab();
	let view = layout.current_view().unwrap();
	assert_eq!(
		layout.split(view, SplitDirection::Vertical),
		Err(LayoutError::UnexpectedNode {
			expected: NodeKind::Tab,
			found: NodeKind::View,
		})
	);

	layout.split(tab, SplitDirection::Vertical).unwrap();
	let list = tab_root(&layout);
	let before = layout.node_count();
	assert!(matches!(
		layout.split(list, SplitDirection::Vertical),
		Err(LayoutError::UnexpectedNode { found: NodeKind::List, .. })
	));
	assert_eq!(layout.node_count(), before);
}

#[test]
fn split_follows_focus_changes() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let tab = layout.current_tab();
	let original = layout.current_view().unwrap();
	let top = layout.split(tab, SplitDirection::Vertical).unwrap();
	layout.focus_view(tab, top).unwrap();
	let new = layout.split(tab, SplitDirection::Vertical).unwrap();

	assert_eq!(layout.views(tab), vec![new, top, original]);
	assert_eq!(layout.current_view(), Some(top));
}
