//! Generational node storage.

use std::collections::TryReserveError;

use crate::Node;

/// A generational handle to a layout node.
///
/// Unlike a raw index, a `LayoutId` carries the generation of the slot it was
/// issued for. Freeing a node bumps the slot's generation, so ids kept after a
/// deletion stop resolving instead of aliasing whatever reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId {
	pub(crate) idx: u32,
	pub(crate) generation: u32,
}

impl std::fmt::Display for LayoutId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "node {}v{}", self.idx, self.generation)
	}
}

struct Slot<D> {
	generation: u32,
	node: Option<Node<D>>,
}

/// Slot storage with a free list.
///
/// Insertion never allocates once [`Arena::reserve`] has succeeded for it, which
/// lets mutations reserve everything first and then apply changes that cannot
/// fail halfway.
pub(crate) struct Arena<D> {
	slots: Vec<Slot<D>>,
	free: Vec<u32>,
}

impl<D> Arena<D> {
	pub fn new() -> Self {
		Self {
			slots: Vec::new(),
			free: Vec::new(),
		}
	}

	/// Ensures `additional` nodes can be inserted without allocating.
	pub fn reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
		let spare = self.free.len() + (self.slots.capacity() - self.slots.len());
		if spare < additional {
			self.slots.try_reserve(additional - spare)?;
		}
		// The free list can hold every slot, so freeing never allocates either.
		let wanted = self.slots.capacity().saturating_sub(self.free.len());
		self.free.try_reserve(wanted)?;
		Ok(())
	}

	pub fn insert(&mut self, node: Node<D>) -> LayoutId {
		if let Some(idx) = self.free.pop() {
			let slot = &mut self.slots[idx as usize];
			slot.node = Some(node);
			return LayoutId {
				idx,
				generation: slot.generation,
			};
		}
		let idx = self.slots.len() as u32;
		self.slots.push(Slot {
			generation: 0,
			node: Some(node),
		});
		LayoutId { idx, generation: 0 }
	}

	pub fn remove(&mut self, id: LayoutId) -> Option<Node<D>> {
		let slot = self.slots.get_mut(id.idx as usize)?;
		if slot.generation != id.generation {
			return None;
		}
		let node = slot.node.take()?;
		slot.generation = slot.generation.wrapping_add(1);
		self.free.push(id.idx);
		Some(node)
	}

	pub fn get(&self, id: LayoutId) -> Option<&Node<D>> {
		self.slots
			.get(id.idx as usize)
			.filter(|slot| slot.generation == id.generation)
			.and_then(|slot| slot.node.as_ref())
	}

	pub fn get_mut(&mut self, id: LayoutId) -> Option<&mut Node<D>> {
		self.slots
			.get_mut(id.idx as usize)
			.filter(|slot| slot.generation == id.generation)
			.and_then(|slot| slot.node.as_mut())
	}

	/// Number of live nodes.
	pub fn len(&self) -> usize {
		self.slots.len() - self.free.len()
	}
}

#[cfg(test)]
mod tests;
