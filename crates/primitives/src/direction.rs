/// Direction of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitDirection {
	/// Children side by side; the width is divided.
	Horizontal,
	/// Children stacked; the height is divided.
	Vertical,
}

impl SplitDirection {
	/// Maps the `vertical` flag used by split commands to a direction.
	pub fn from_vertical(vertical: bool) -> Self {
		if vertical { Self::Vertical } else { Self::Horizontal }
	}

	/// Returns the other direction.
	pub fn flip(self) -> Self {
		match self {
			Self::Horizontal => Self::Vertical,
			Self::Vertical => Self::Horizontal,
		}
	}
}

/// Screen-space direction for cursor and focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialDirection {
	Left,
	Right,
	Up,
	Down,
}

impl SpatialDirection {
	/// Returns the opposite direction.
	pub fn opposite(self) -> Self {
		match self {
			Self::Left => Self::Right,
			Self::Right => Self::Left,
			Self::Up => Self::Down,
			Self::Down => Self::Up,
		}
	}

	/// Returns the unit `(column, row)` delta for this direction.
	pub fn delta(self) -> (isize, isize) {
		match self {
			Self::Left => (-1, 0),
			Self::Right => (1, 0),
			Self::Up => (0, -1),
			Self::Down => (0, 1),
		}
	}
}
