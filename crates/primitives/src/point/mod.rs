/// A location in a buffer, measured in lines and characters.
///
/// Points order by row, then by column, which is the order the text reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
	/// Zero-based line index.
	pub row: usize,
	/// Zero-based character index within the line.
	pub col: usize,
}

impl Point {
	/// The buffer origin.
	pub const ORIGIN: Point = Point { row: 0, col: 0 };

	pub const fn new(row: usize, col: usize) -> Self {
		Self { row, col }
	}

	/// Returns true if this point is the buffer origin.
	pub fn is_origin(self) -> bool {
		self == Self::ORIGIN
	}

	/// Returns the two points ordered so the earlier one comes first.
	pub fn ordered(a: Point, b: Point) -> (Point, Point) {
		if a <= b { (a, b) } else { (b, a) }
	}
}

impl std::fmt::Display for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.row, self.col)
	}
}
