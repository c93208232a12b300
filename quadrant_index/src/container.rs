// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable-handle item store layered over a [`QuadTree`].

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::TreeConfig;
use crate::error::Error;
use crate::tree::{Location, QuadTree};
use crate::types::{Rect, Scalar};

/// Generational handle for stored items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u32, u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Keys are 32-bit; a container never holds 2^32 slots."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot<V> {
    // Survives vacancy so a stale key can never match a later occupant.
    generation: u32,
    entry: Option<Entry<V>>,
}

#[derive(Clone, Debug)]
struct Entry<V> {
    value: V,
    location: Location,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Items of type `V` indexed by rectangle.
///
/// Values live in a generational slot arena threaded in insertion order; the
/// tree holds only [`Key`]s. Each entry records where the tree placed it, so
/// removal never searches the tree.
pub struct QuadTreeContainer<T: Scalar, V> {
    slots: Vec<Slot<V>>,
    free_list: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    tree: QuadTree<T, Key>,
}

impl<T: Scalar, V> QuadTreeContainer<T, V> {
    /// Create an empty container covering `area`, which is not checked.
    pub fn new(area: Rect<T>) -> Self {
        Self::with_tree(QuadTree::new(area))
    }

    /// Create an empty container from a validated config.
    pub fn from_config(config: TreeConfig<T>) -> Result<Self, Error> {
        Ok(Self::with_tree(QuadTree::from_config(config)?))
    }

    fn with_tree(tree: QuadTree<T, Key>) -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            tree,
        }
    }

    /// Reinitialise with a new area and root level, dropping every item.
    ///
    /// The area is not checked; see [`QuadTree::new`].
    pub fn create(&mut self, area: Rect<T>, level: usize) {
        self.clear_store();
        self.tree.create(area, level);
    }

    /// Change the covered area, dropping every item. The area is not checked.
    pub fn resize(&mut self, area: Rect<T>) {
        self.clear_store();
        self.tree.resize(area);
    }

    /// Drop every item. Keys handed out so far become stale.
    pub fn clear(&mut self) {
        self.clear_store();
        self.tree.clear();
    }

    fn clear_store(&mut self) {
        self.free_list.clear();
        for (idx, slot) in self.slots.iter_mut().enumerate().rev() {
            slot.entry = None;
            self.free_list.push(idx);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Reserve space for at least `n` more items.
    pub fn reserve(&mut self, n: usize) {
        self.slots.reserve(n);
    }

    /// Store `value` under `rect`. Returns a stable handle.
    pub fn insert(&mut self, value: V, rect: Rect<T>) -> Key {
        let idx = self.free_list.pop().unwrap_or_else(|| {
            self.slots.push(Slot {
                generation: 0,
                entry: None,
            });
            self.slots.len() - 1
        });
        let generation = self.slots[idx].generation.wrapping_add(1);
        self.slots[idx].generation = generation;
        let key = Key::new(idx, generation);

        let location = self.tree.insert(key, rect);
        self.slots[idx].entry = Some(Entry {
            value,
            location,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(e) = self.slots[tail].entry.as_mut() {
                    e.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        key
    }

    /// Keys of items whose rectangle overlaps `area`.
    pub fn find(&self, area: &Rect<T>) -> Vec<Key> {
        self.tree.find(area)
    }

    /// Like [`find`](Self::find), appending to `out`.
    pub fn find_into(&self, area: &Rect<T>, out: &mut Vec<Key>) {
        self.tree.find_into(area, out);
    }

    /// Remove an item. Returns `false` if the key is stale or unknown.
    pub fn remove(&mut self, key: Key) -> bool {
        self.take(key).is_some()
    }

    /// Remove an item and return its value.
    pub fn take(&mut self, key: Key) -> Option<V> {
        let slot = self.slots.get_mut(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        let entry = slot.entry.take()?;
        self.free_list.push(key.idx());
        self.unlink(entry.prev, entry.next);
        self.detach(entry.location);
        self.len -= 1;
        Some(entry.value)
    }

    /// Re-place an item under a new rectangle, keeping its key and value.
    pub fn update(&mut self, key: Key, rect: Rect<T>) -> Result<(), Error> {
        let location = self.entry(key).ok_or(Error::NotFound(key))?.location;
        self.detach(location);
        let location = self.tree.insert(key, rect);
        self.set_location(key, location);
        Ok(())
    }

    // Erase a tree entry and re-point whichever entry took its slot.
    fn detach(&mut self, location: Location) {
        if let Some(removal) = self.tree.remove_at(location)
            && let Some((moved, location)) = removal.moved
        {
            self.set_location(moved, location);
        }
    }

    fn unlink(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(p) => {
                if let Some(e) = self.slots[p].entry.as_mut() {
                    e.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(e) = self.slots[n].entry.as_mut() {
                    e.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn set_location(&mut self, key: Key, location: Location) {
        if let Some(e) = self.entry_mut(key) {
            e.location = location;
        }
    }

    fn entry(&self, key: Key) -> Option<&Entry<V>> {
        let slot = self.slots.get(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        slot.entry.as_ref()
    }

    fn entry_mut(&mut self, key: Key) -> Option<&mut Entry<V>> {
        let slot = self.slots.get_mut(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        slot.entry.as_mut()
    }

    /// Whether `key` refers to a live item.
    pub fn contains_key(&self, key: Key) -> bool {
        self.entry(key).is_some()
    }

    /// The value stored under `key`.
    pub fn get(&self, key: Key) -> Option<&V> {
        self.entry(key).map(|e| &e.value)
    }

    /// The value stored under `key`, mutably.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut V> {
        self.entry_mut(key).map(|e| &mut e.value)
    }

    /// The rectangle `key` was placed with.
    pub fn rect(&self, key: Key) -> Option<Rect<T>> {
        let location = self.entry(key)?.location;
        self.tree.get(location).map(|(_, rect)| rect)
    }

    /// Area of the tree node holding `key`.
    pub fn node_area(&self, key: Key) -> Option<Rect<T>> {
        let location = self.entry(key)?.location;
        self.tree.area_at(location)
    }

    /// Live items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &V)> + '_ {
        let mut cursor = self.head;
        core::iter::from_fn(move || {
            let idx = cursor?;
            let slot = &self.slots[idx];
            let entry = slot.entry.as_ref()?;
            cursor = entry.next;
            Some((Key::new(idx, slot.generation), &entry.value))
        })
    }

    /// Keys of every item, in tree traversal order.
    pub fn collect_items(&self) -> Vec<Key> {
        self.tree.collect_items()
    }

    /// Area of every tree node, parents before children.
    pub fn collect_areas(&self) -> Vec<Rect<T>> {
        self.tree.collect_areas()
    }

    /// Number of entries held by the tree. Always equal to [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no items are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Area covered by the tree root.
    pub fn area(&self) -> Rect<T> {
        self.tree.area()
    }

    /// The underlying tree, for diagnostics.
    pub fn tree(&self) -> &QuadTree<T, Key> {
        &self.tree
    }
}

impl<T: Scalar, V> Debug for QuadTreeContainer<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTreeContainer")
            .field("len", &self.len)
            .field("total_slots", &self.slots.len())
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn world() -> QuadTreeContainer<f32, &'static str> {
        QuadTreeContainer::new(Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn find_returns_handles_to_stored_values() {
        let mut c = world();
        let a = c.insert("a", Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        let b = c.insert("b", Rect::from_xywh(50.0, 50.0, 10.0, 10.0));
        let _ = c.insert("c", Rect::from_xywh(90.0, 90.0, 5.0, 5.0));

        assert_eq!(c.find(&Rect::from_xywh(0.0, 0.0, 20.0, 20.0)), vec![a]);
        assert_eq!(c.find(&Rect::new(40.0, 40.0, 70.0, 70.0)), vec![b]);
        assert_eq!(c.get(b), Some(&"b"));
    }

    #[test]
    fn found_items_can_be_edited_in_place() {
        let mut c: QuadTreeContainer<f64, u32> =
            QuadTreeContainer::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        c.insert(1, Rect::new(10.0, 10.0, 20.0, 20.0));
        c.insert(2, Rect::new(15.0, 15.0, 25.0, 25.0));
        for key in c.find(&Rect::new(0.0, 0.0, 30.0, 30.0)) {
            if let Some(v) = c.get_mut(key) {
                *v *= 10;
            }
        }
        let mut values: Vec<_> = c.iter().map(|(_, v)| *v).collect();
        values.sort_unstable();
        assert_eq!(values, vec![10, 20]);
    }

    #[test]
    fn double_remove_reports_not_found() {
        let mut c = world();
        let a = c.insert("a", Rect::new(10.0, 10.0, 20.0, 20.0));
        let b = c.insert("b", Rect::new(60.0, 60.0, 70.0, 70.0));
        assert!(c.remove(a));
        assert!(!c.remove(a));
        assert_eq!(c.len(), 1);
        assert_eq!(c.size(), 1);
        assert_eq!(c.collect_items(), vec![b]);
    }

    #[test]
    fn removal_follows_swapped_entries() {
        let mut c = world();
        // All straddle the centre, so they share the root's local list.
        let a = c.insert("a", Rect::new(40.0, 40.0, 60.0, 60.0));
        let b = c.insert("b", Rect::new(45.0, 45.0, 55.0, 55.0));
        let d = c.insert("d", Rect::new(30.0, 30.0, 70.0, 70.0));
        assert_eq!(c.take(a), Some("a"));
        assert_eq!(c.rect(d), Some(Rect::new(30.0, 30.0, 70.0, 70.0)));
        assert_eq!(c.take(d), Some("d"));
        assert_eq!(c.take(b), Some("b"));
        assert!(c.is_empty());
        assert_eq!(c.size(), 0);
    }

    #[test]
    fn stale_key_does_not_alias_reused_slot() {
        let mut c = world();
        let a = c.insert("a", Rect::new(10.0, 10.0, 20.0, 20.0));
        assert!(c.remove(a));
        let b = c.insert("b", Rect::new(10.0, 10.0, 20.0, 20.0));
        assert_ne!(a, b);
        assert!(!c.contains_key(a));
        assert_eq!(c.get(a), None);
        assert!(!c.remove(a));
        assert_eq!(c.get(b), Some(&"b"));
    }

    #[test]
    fn iteration_follows_insertion_order_across_reuse() {
        let mut c = world();
        let a = c.insert("a", Rect::new(10.0, 10.0, 20.0, 20.0));
        let _b = c.insert("b", Rect::new(60.0, 10.0, 70.0, 20.0));
        let _c = c.insert("c", Rect::new(10.0, 60.0, 20.0, 70.0));
        c.remove(a);
        c.insert("d", Rect::new(60.0, 60.0, 70.0, 70.0));
        let order: Vec<_> = c.iter().map(|(_, v)| *v).collect();
        assert_eq!(order, vec!["b", "c", "d"]);
    }

    #[test]
    fn update_moves_item_between_nodes() {
        let mut c = world();
        let k = c.insert("k", Rect::new(10.0, 10.0, 20.0, 20.0));
        let other = c.insert("o", Rect::new(12.0, 12.0, 18.0, 18.0));
        c.update(k, Rect::new(80.0, 80.0, 90.0, 90.0)).unwrap();
        assert!(c.find(&Rect::new(0.0, 0.0, 30.0, 30.0)).contains(&other));
        assert!(!c.find(&Rect::new(0.0, 0.0, 30.0, 30.0)).contains(&k));
        assert_eq!(c.find(&Rect::new(75.0, 75.0, 95.0, 95.0)), vec![k]);
        assert_eq!(c.get(k), Some(&"k"));
        assert!(c.remove(other));
        assert!(c.remove(k));
    }

    #[test]
    fn update_of_stale_key_errors() {
        let mut c = world();
        let k = c.insert("k", Rect::new(10.0, 10.0, 20.0, 20.0));
        c.remove(k);
        assert_eq!(
            c.update(k, Rect::new(0.0, 0.0, 1.0, 1.0)),
            Err(Error::NotFound(k))
        );
    }

    #[test]
    fn node_area_contains_item_rect() {
        let mut c = world();
        let r = Rect::new(61.0, 12.0, 64.0, 14.0);
        let k = c.insert("k", r);
        let area = c.node_area(k).unwrap();
        assert!(area.contains(&r));
        assert!(c.collect_areas().contains(&area));
    }

    #[test]
    fn clear_and_resize_empty_both_structures() {
        let mut c = world();
        let a = c.insert("a", Rect::new(10.0, 10.0, 20.0, 20.0));
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.size(), 0);
        assert!(!c.contains_key(a));

        let b = c.insert("b", Rect::new(10.0, 10.0, 20.0, 20.0));
        c.resize(Rect::new(0.0, 0.0, 1000.0, 1000.0));
        assert!(!c.contains_key(b));
        assert_eq!(c.iter().count(), 0);
        assert_eq!(c.area(), Rect::new(0.0, 0.0, 1000.0, 1000.0));

        c.create(Rect::new(0.0, 0.0, 10.0, 10.0), 4);
        assert_eq!(c.tree().level(), 4);
        assert!(c.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = TreeConfig::new(Rect::new(0.0, 0.0, -5.0, 5.0));
        let res: Result<QuadTreeContainer<f64, u8>, _> = QuadTreeContainer::from_config(cfg);
        assert_eq!(res.err(), Some(Error::InvalidArea));
    }
}
