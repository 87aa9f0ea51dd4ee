/// Identifies a buffer owned by the host.
///
/// Views hold a `BufferId` rather than the buffer itself: buffers outlive the
/// views that display them, and one buffer may be shown by many views at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BufferId(pub u64);

impl std::fmt::Display for BufferId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "buffer#{}", self.0)
	}
}
