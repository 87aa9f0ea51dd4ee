use pretty_assertions::assert_eq;
use quill_primitives::{BufferId, Rect, SpatialDirection, SplitDirection};

use crate::{Layout, LayoutError, LayoutId, NodeKind};

struct Grid {
	layout: Layout,
	tab: LayoutId,
	top: LayoutId,
	left: LayoutId,
	right: LayoutId,
}

/// One full-width view above two side by side:
///
/// ```text
/// +--------------------+
/// |        top         |
/// +----------+---------+
/// |   left   |  right  |
/// +----------+---------+
/// ```
fn grid() -> Grid {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let tab = layout.current_tab();
	let right = layout.current_view().unwrap();
	let top = layout.split(tab, SplitDirection::Vertical).unwrap();
	let left = layout.split(tab, SplitDirection::Horizontal).unwrap();
	layout.distribute_rect(layout.root(), Rect::new(0, 0, 20, 11));
	Grid {
		layout,
		tab,
		top,
		left,
		right,
	}
}

#[test]
fn direction_prefers_overlap() {
	let mut g = grid();
	assert_eq!(g.layout.view_in_direction(g.tab, SpatialDirection::Up), Ok(Some(g.top)));
	assert_eq!(g.layout.view_in_direction(g.tab, SpatialDirection::Left), Ok(Some(g.left)));

	g.layout.focus_view(g.tab, g.top).unwrap();
	// Both bottom views touch; the wider overlap wins.
	assert_eq!(g.layout.view_in_direction(g.tab, SpatialDirection::Down), Ok(Some(g.left)));
}

#[test]
fn direction_wraps_to_the_far_side() {
	let mut g = grid();
	assert_eq!(g.layout.view_in_direction(g.tab, SpatialDirection::Right), Ok(Some(g.left)));
	assert_eq!(g.layout.view_in_direction(g.tab, SpatialDirection::Down), Ok(Some(g.top)));

	g.layout.focus_view(g.tab, g.top).unwrap();
	assert_eq!(g.layout.view_in_direction(g.tab, SpatialDirection::Left), Ok(None));
}

#[test]
fn single_view_has_no_neighbours() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	layout.distribute_rect(layout.root(), Rect::new(0, 0, 10, 10));
	let tab = layout.current_tab();
	for dir in [
		SpatialDirection::Left,
		SpatialDirection::Right,
		SpatialDirection::Up,
		SpatialDirection::Down,
	] {
		assert_eq!(layout.view_in_direction(tab, dir), Ok(None));
	}
}

#[test]
fn view_cycling_wraps_in_layout_order() {
	let mut g = grid();
	assert_eq!(g.layout.views(g.tab), vec![g.top, g.left, g.right]);
	assert_eq!(g.layout.next_view(g.tab), Ok(g.top));
	assert_eq!(g.layout.prev_view(g.tab), Ok(g.left));

	g.layout.focus_view(g.tab, g.top).unwrap();
	assert_eq!(g.layout.prev_view(g.tab), Ok(g.right));
	assert_eq!(g.layout.current_view(), Some(g.top));
}

#[test]
fn focus_view_checks_membership() {
	let mut g = grid();
	let other_tab = g.layout.add_tab(g.layout.root()).unwrap();
	let foreign = g.layout.views(other_tab)[0];
	assert_eq!(g.layout.focus_view(g.tab, foreign), Err(LayoutError::NoParent(foreign)));
	assert_eq!(
		g.layout.focus_view(g.tab, other_tab),
		Err(LayoutError::UnexpectedNode {
			expected: NodeKind::View,
			found: NodeKind::Tab,
		})
	);
	assert_eq!(g.layout.current_view(), Some(g.right));
}

#[test]
fn tab_cycling_wraps() {
	let mut layout: Layout = Layout::new(BufferId(1)).unwrap();
	let root = layout.root();
	let first = layout.current_tab();
	let second = layout.add_tab(root).unwrap();
	let third = layout.add_tab(root).unwrap();

	assert_eq!(layout.next_tab(root), Ok(second));
	assert_eq!(layout.next_tab(root), Ok(third));
	assert_eq!(layout.next_tab(root), Ok(first));
	assert_eq!(layout.prev_tab(root), Ok(third));
	assert_eq!(layout.current_tab(), third);

	layout.select_tab(root, second).unwrap();
	assert_eq!(layout.current_tab(), second);
	assert_eq!(layout.select_tab(root, root), Err(LayoutError::NoParent(root)));
}
