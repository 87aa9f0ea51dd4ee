//! Layout tree for buffer views.
//!
//! A [`Layout`] owns every node of the tree in a generational arena and hands
//! out [`LayoutId`]s. The tree has four node kinds:
//!
//! - [`View`] - a window onto a buffer, with its own cursor and scroll
//! - [`List`] - ordered children split along one [`SplitDirection`]
//! - [`Tab`] - one subtree plus the view that has focus inside it
//! - [`TabList`] - the open tabs plus the active one
//!
//! Nodes do not store parent links. Every operation that needs ancestry goes
//! through [`Layout::find_parent`], which searches down from a known root.
//!
//! # Modules
//!
//! - `arena` - generational node storage
//! - `node` - node variants
//! - `tree` - construction and tab creation
//! - `split` - splitting the focused view
//! - `geometry` - rect distribution, separators and the tab bar
//! - `query` - lookups by position, identity and buffer
//! - `delete` - removal with cascading and focus repair
//! - `navigation` - focus and tab switching
//! - `follow` - scrolling a view to keep its cursor visible

mod arena;
mod delete;
mod error;
mod follow;
mod geometry;
mod navigation;
mod node;
mod query;
mod split;
mod tree;

pub use arena::LayoutId;
pub use error::{LayoutError, Result};
pub use follow::follow_cursor;
pub use node::{List, Node, NodeKind, Tab, TabList, View};
pub use quill_primitives::{SpatialDirection, SplitDirection};
pub use tree::Layout;
