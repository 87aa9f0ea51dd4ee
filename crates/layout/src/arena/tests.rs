use quill_primitives::BufferId;

use super::*;
use crate::View;

fn view(buffer: u64) -> Node<()> {
	Node::View(View::new(BufferId(buffer)))
}

#[test]
fn freed_ids_stop_resolving() {
	let mut arena = Arena::new();
	arena.reserve(1).unwrap();
	let id = arena.insert(view(1));
	assert!(arena.get(id).is_some());
	assert!(arena.remove(id).is_some());
	assert!(arena.get(id).is_none());
	assert!(arena.remove(id).is_none());
}

#[test]
fn reused_slot_gets_new_generation() {
	let mut arena = Arena::new();
	arena.reserve(1).unwrap();
	let old = arena.insert(view(1));
	arena.remove(old);
	let new = arena.insert(view(2));
	assert_eq!(old.idx, new.idx);
	assert_ne!(old, new);
	assert!(arena.get(old).is_none());
	assert!(matches!(arena.get(new), Some(Node::View(v)) if v.buffer == BufferId(2)));
}

#[test]
fn len_counts_live_nodes() {
	let mut arena = Arena::new();
	arena.reserve(3).unwrap();
	let a = arena.insert(view(1));
	arena.insert(view(2));
	arena.insert(view(3));
	arena.remove(a);
	assert_eq!(arena.len(), 2);
}

#[test]
fn reserve_counts_free_slots() {
	let mut arena: Arena<()> = Arena::new();
	arena.reserve(2).unwrap();
	let a = arena.insert(view(1));
	let b = arena.insert(view(2));
	arena.remove(a);
	arena.remove(b);
	let capacity = arena.slots.capacity();
	arena.reserve(2).unwrap();
	assert_eq!(arena.slots.capacity(), capacity);
}
