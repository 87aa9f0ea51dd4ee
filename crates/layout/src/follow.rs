use quill_primitives::Point;

use crate::View;

/// Returns the scroll that keeps `view`'s cursor on screen.
///
/// `cursor_column` is the cursor's display column, which depends on tab
/// expansion and so is computed by the buffer. The margins keep that many rows
/// and columns visible around the cursor; each is capped at half the view.
pub fn follow_cursor<D>(view: &View<D>, cursor_column: usize, horizontal_margin: u16, vertical_margin: u16) -> Point {
	let row = scroll_axis(view.scroll.row, view.cursor.row, usize::from(view.rect.height), vertical_margin);
	let col = scroll_axis(view.scroll.col, cursor_column, usize::from(view.rect.width), horizontal_margin);
	Point::new(row, col)
}

fn scroll_axis(scroll: usize, cursor: usize, extent: usize, margin: u16) -> usize {
	if extent == 0 {
		return cursor;
	}
	let margin = usize::from(margin).min(extent.saturating_sub(1) / 2);
	if cursor < scroll + margin {
		cursor.saturating_sub(margin)
	} else if cursor + margin >= scroll + extent {
		cursor + margin + 1 - extent
	} else {
		scroll
	}
}
