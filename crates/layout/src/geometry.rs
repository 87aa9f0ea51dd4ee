//! Rect distribution, separators and the tab bar.

use quill_primitives::{Rect, SplitDirection};
use smallvec::SmallVec;
use tracing::trace;

use crate::{Layout, LayoutId, Node};

impl<D> Layout<D> {
	/// Assigns screen rects to `node` and everything visible under it.
	///
	/// Lists divide their span among their children with one separator cell
	/// between neighbours. A tab list with more than one tab gives up its top row
	/// to the tab bar.
	pub fn distribute_rect(&mut self, node: LayoutId, rect: Rect) {
		let assignments: SmallVec<[(LayoutId, Rect); 4]> = match self.arena.get_mut(node) {
			None => return,
			Some(Node::View(view)) => {
				view.rect = rect;
				return;
			}
			Some(Node::List(list)) => {
				list.rect = rect;
				split_rect(rect, list.direction, list.children.len())
					.zip(list.children.iter().copied())
					.map(|(slice, child)| (child, slice))
					.collect()
			}
			Some(Node::Tab(tab)) => {
				tab.rect = rect;
				smallvec::smallvec![(tab.root, rect)]
			}
			Some(Node::TabList(list)) => {
				list.rect = rect;
				let mut inner = rect;
				if list.tabs.len() > 1 {
					inner.y = inner.y.saturating_add(1);
					inner.height = inner.height.saturating_sub(1);
				}
				smallvec::smallvec![(list.current, inner)]
			}
		};

		trace!(%node, ?rect, children = assignments.len(), "Distributing rect");
		for (child, slice) in assignments {
			self.distribute_rect(child, slice);
		}
	}

	/// Returns the separator cells of the visible tree, as last distributed.
	pub fn separators(&self, node: LayoutId) -> Vec<(SplitDirection, Rect)> {
		let mut out = Vec::new();
		self.collect_separators(node, &mut out);
		out
	}

	fn collect_separators(&self, node: LayoutId, out: &mut Vec<(SplitDirection, Rect)>) {
		match self.node(node) {
			Some(Node::List(list)) => {
				let rects = list.children.iter().filter_map(|&child| self.node(child).map(Node::rect));
				for (child_rect, _) in rects.zip(list.children.iter().skip(1)) {
					let sep = match list.direction {
						SplitDirection::Vertical => Rect::new(list.rect.x, child_rect.bottom(), list.rect.width, 1),
						SplitDirection::Horizontal => Rect::new(child_rect.right(), list.rect.y, 1, list.rect.height),
					};
					out.push((list.direction, sep));
				}
				for &child in &list.children {
					self.collect_separators(child, out);
				}
			}
			Some(Node::Tab(tab)) => self.collect_separators(tab.root, out),
			Some(Node::TabList(list)) => self.collect_separators(list.current, out),
			Some(Node::View(_)) | None => {}
		}
	}

	/// The row reserved for the tab bar, present only with more than one tab.
	pub fn tab_bar_rect(&self, tab_list: LayoutId) -> Option<Rect> {
		match self.node(tab_list)? {
			Node::TabList(list) if list.tabs.len() > 1 => Some(Rect::new(list.rect.x, list.rect.y, list.rect.width, 1)),
			_ => None,
		}
	}
}

/// Splits `rect` into `count` slices along `direction`.
///
/// `count - 1` cells are kept for separators. The remaining span is divided
/// evenly and the remainder goes one cell at a time to the first slices.
pub(crate) fn split_rect(rect: Rect, direction: SplitDirection, count: usize) -> impl Iterator<Item = Rect> {
	let (start, span) = match direction {
		SplitDirection::Vertical => (rect.y, rect.height),
		SplitDirection::Horizontal => (rect.x, rect.width),
	};
	let count_u32 = count.max(1) as u32;
	let available = u32::from(span).saturating_sub(count_u32 - 1);
	let base = available / count_u32;
	let mut leftover = available % count_u32;
	let mut pos = u32::from(start);

	(0..count).map(move |_| {
		let mut len = base;
		if leftover > 0 {
			leftover -= 1;
			len += 1;
		}
		let slice_start = pos.min(u32::from(u16::MAX)) as u16;
		let slice_len = len.min(u32::from(u16::MAX)) as u16;
		pos += len + 1;
		match direction {
			SplitDirection::Vertical => Rect::new(rect.x, slice_start, rect.width, slice_len),
			SplitDirection::Horizontal => Rect::new(slice_start, rect.y, slice_len, rect.height),
		}
	})
}
