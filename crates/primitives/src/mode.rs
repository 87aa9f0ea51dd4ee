/// Modal editing state governing how a key is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
	/// Keys accumulate into commands.
	#[default]
	Normal,
	/// Keys insert text.
	Insert,
}

impl Mode {
	/// Returns a short display label for the status line.
	pub fn name(self) -> &'static str {
		match self {
			Mode::Normal => "NORMAL",
			Mode::Insert => "INSERT",
		}
	}
}
