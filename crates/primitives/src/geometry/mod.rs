//! Screen geometry in terminal cells.

/// A cell position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
	pub x: u16,
	pub y: u16,
}

impl Position {
	pub const fn new(x: u16, y: u16) -> Self {
		Self { x, y }
	}
}

/// A screen rectangle with an inclusive origin and exclusive far edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,
}

impl Rect {
	/// Creates a rect, shrinking the size so the far edges stay within `u16`.
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		let max_width = u16::MAX - x;
		let max_height = u16::MAX - y;
		Self {
			x,
			y,
			width: if width > max_width { max_width } else { width },
			height: if height > max_height { max_height } else { height },
		}
	}

	pub const fn left(self) -> u16 {
		self.x
	}

	pub const fn right(self) -> u16 {
		self.x.saturating_add(self.width)
	}

	pub const fn top(self) -> u16 {
		self.y
	}

	pub const fn bottom(self) -> u16 {
		self.y.saturating_add(self.height)
	}

	pub const fn area(self) -> u32 {
		self.width as u32 * self.height as u32
	}

	pub const fn is_empty(self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns true if `pos` lies inside the rect.
	pub const fn contains(self, pos: Position) -> bool {
		pos.x >= self.left() && pos.x < self.right() && pos.y >= self.top() && pos.y < self.bottom()
	}

	/// Returns true if the two rects share at least one cell.
	pub const fn intersects(self, other: Rect) -> bool {
		self.left() < other.right()
			&& other.left() < self.right()
			&& self.top() < other.bottom()
			&& other.top() < self.bottom()
	}
}
