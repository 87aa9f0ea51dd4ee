//! Focus movement between views and tabs.

use std::cmp::Ordering;

use quill_primitives::{Rect, SpatialDirection};

use crate::tree::unexpected;
use crate::{Layout, LayoutError, LayoutId, NodeKind, Result};

impl<D> Layout<D> {
	/// Focuses `view`, which must be a view inside `tab`.
	pub fn focus_view(&mut self, tab: LayoutId, view: LayoutId) -> Result<()> {
		if self.view(view).is_none() {
			return Err(unexpected(NodeKind::View, self.kind_of(view)?));
		}
		let root = self.tab(tab)?.root;
		if !self.contains(root, view) {
			return Err(LayoutError::NoParent(view));
		}
		self.tab_mut(tab)?.current = view;
		Ok(())
	}

	/// Makes `tab` the active tab of `tab_list`.
	pub fn select_tab(&mut self, tab_list: LayoutId, tab: LayoutId) -> Result<()> {
		let list = self.tab_list_mut(tab_list)?;
		if !list.tabs.contains(&tab) {
			return Err(LayoutError::NoParent(tab));
		}
		list.current = tab;
		Ok(())
	}

	/// Activates the tab after the current one, wrapping around.
	pub fn next_tab(&mut self, tab_list: LayoutId) -> Result<LayoutId> {
		self.cycle_tab(tab_list, 1)
	}

	/// Activates the tab before the current one, wrapping around.
	pub fn prev_tab(&mut self, tab_list: LayoutId) -> Result<LayoutId> {
		self.cycle_tab(tab_list, -1)
	}

	fn cycle_tab(&mut self, tab_list: LayoutId, step: isize) -> Result<LayoutId> {
		let list = self.tab_list_mut(tab_list)?;
		let len = list.tabs.len();
		if len == 0 {
			return Ok(list.current);
		}
		let index = list.tabs.iter().position(|&t| t == list.current).unwrap_or(0);
		let next = (index as isize + step).rem_euclid(len as isize) as usize;
		list.current = list.tabs[next];
		Ok(list.current)
	}

	/// Returns the view after the focused one in layout order, wrapping around.
	pub fn next_view(&self, tab: LayoutId) -> Result<LayoutId> {
		self.cycle_view(tab, 1)
	}

	/// Returns the view before the focused one in layout order, wrapping around.
	pub fn prev_view(&self, tab: LayoutId) -> Result<LayoutId> {
		self.cycle_view(tab, -1)
	}

	fn cycle_view(&self, tab: LayoutId, step: isize) -> Result<LayoutId> {
		let current = self.tab(tab)?.current;
		let views = self.views(tab);
		if views.is_empty() {
			return Ok(current);
		}
		let index = views.iter().position(|&v| v == current).unwrap_or(0);
		Ok(views[(index as isize + step).rem_euclid(views.len() as isize) as usize])
	}

	/// Finds the view next to the focused one in `direction`, using the rects
	/// from the last geometry pass.
	///
	/// Candidates with more perpendicular overlap win, then closer ones. When
	/// nothing lies that way, the search wraps to the farthest view on the
	/// opposite side.
	pub fn view_in_direction(&self, tab: LayoutId, direction: SpatialDirection) -> Result<Option<LayoutId>> {
		let current = self.tab(tab)?.current;
		let Some(current_rect) = self.view(current).map(|v| v.rect) else {
			return Ok(None);
		};
		let candidates: Vec<(LayoutId, Rect)> = self
			.views(tab)
			.into_iter()
			.filter(|&v| v != current)
			.filter_map(|v| self.view(v).map(|view| (v, view.rect)))
			.collect();

		let ahead = candidates
			.iter()
			.filter(|(_, r)| is_in_direction(current_rect, *r, direction))
			.max_by(|(_, a), (_, b)| compare_candidates(current_rect, *a, *b, direction))
			.map(|(v, _)| *v);
		if ahead.is_some() {
			return Ok(ahead);
		}

		let wrap = direction.opposite();
		Ok(candidates
			.iter()
			.filter(|(_, r)| is_in_direction(current_rect, *r, wrap))
			.max_by(|(_, a), (_, b)| {
				distance(current_rect, *a, wrap)
					.cmp(&distance(current_rect, *b, wrap))
					.then_with(|| overlap(current_rect, *a, wrap).cmp(&overlap(current_rect, *b, wrap)))
			})
			.map(|(v, _)| *v))
	}
}

fn is_in_direction(current: Rect, candidate: Rect, direction: SpatialDirection) -> bool {
	match direction {
		SpatialDirection::Left => candidate.right() <= current.left(),
		SpatialDirection::Right => candidate.left() >= current.right(),
		SpatialDirection::Up => candidate.bottom() <= current.top(),
		SpatialDirection::Down => candidate.top() >= current.bottom(),
	}
}

/// Overlap on the axis perpendicular to `direction`.
fn overlap(current: Rect, candidate: Rect, direction: SpatialDirection) -> u16 {
	match direction {
		SpatialDirection::Left | SpatialDirection::Right => {
			let start = current.top().max(candidate.top());
			let end = current.bottom().min(candidate.bottom());
			end.saturating_sub(start)
		}
		SpatialDirection::Up | SpatialDirection::Down => {
			let start = current.left().max(candidate.left());
			let end = current.right().min(candidate.right());
			end.saturating_sub(start)
		}
	}
}

fn distance(current: Rect, candidate: Rect, direction: SpatialDirection) -> u16 {
	match direction {
		SpatialDirection::Left => current.left().saturating_sub(candidate.right()),
		SpatialDirection::Right => candidate.left().saturating_sub(current.right()),
		SpatialDirection::Up => current.top().saturating_sub(candidate.bottom()),
		SpatialDirection::Down => candidate.top().saturating_sub(current.bottom()),
	}
}

/// Orders candidates so the better one compares greater.
fn compare_candidates(current: Rect, a: Rect, b: Rect, direction: SpatialDirection) -> Ordering {
	overlap(current, a, direction)
		.cmp(&overlap(current, b, direction))
		.then_with(|| distance(current, b, direction).cmp(&distance(current, a, direction)))
}

#[cfg(test)]
mod tests;
