//! Core value types shared by the layout tree and the modal engine.

/// Directional types for navigation and splitting.
pub mod direction;
/// Screen geometry: positions and rectangles.
pub mod geometry;
/// Identifier types for editor entities.
pub mod ids;
/// Key event types.
pub mod key;
/// Editor mode definitions.
pub mod mode;
/// Text coordinates (row/column).
pub mod point;

pub use direction::{SpatialDirection, SplitDirection};
pub use geometry::{Position, Rect};
pub use ids::BufferId;
pub use key::{Key, KeyCode, Modifiers};
pub use mode::Mode;
pub use point::Point;
