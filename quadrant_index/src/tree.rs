// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quad-tree: recursive four-way partition of an area.
//!
//! Every item is stored at the deepest node whose area contains its rectangle
//! but none of whose four quadrants does. Nodes live in an arena owned by the
//! tree; each non-root node is referenced by exactly one parent slot, so a
//! subtree is owned by its parent alone and is dropped with it.

use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::{debug, trace};

use crate::config::TreeConfig;
use crate::error::Error;
use crate::types::{Rect, Scalar};

/// Index of a node in the tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: Self = Self(0);

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node ids are 32-bit; a tree never approaches 2^32 nodes."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Where an entry physically resides: a node and a position in its local list.
///
/// Valid until the entry is removed, another entry is removed from the same
/// node (see [`Removal::moved`]), or the tree is cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    node: NodeId,
    slot: usize,
}

impl Location {
    /// Node holding the entry.
    pub const fn node(self) -> NodeId {
        self.node
    }

    /// Position within the node's local list.
    pub const fn slot(self) -> usize {
        self.slot
    }
}

/// Outcome of [`QuadTree::remove_at`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Removal<T, H> {
    /// The removed handle.
    pub item: H,
    /// Its rectangle.
    pub rect: Rect<T>,
    /// The entry that was moved into the vacated slot, with its new location.
    pub moved: Option<(H, Location)>,
}

#[derive(Clone, Debug)]
struct Node<T, H> {
    area: Rect<T>,
    level: usize,
    child_areas: [Rect<T>; 4],
    children: [Option<NodeId>; 4],
    items: Vec<(H, Rect<T>)>,
}

impl<T: Scalar, H> Node<T, H> {
    fn new(area: Rect<T>, level: usize) -> Self {
        Self {
            area,
            level,
            child_areas: area.quadrants(),
            children: [None; 4],
            items: Vec::new(),
        }
    }
}

/// Region quad-tree over handles `H`.
///
/// Insertion places `(item, rect)` by containment alone: there is no item
/// threshold and no rebalancing. Depth is bounded by
/// [`TreeConfig::max_depth`] so degenerate rectangles cannot recurse forever.
pub struct QuadTree<T: Scalar, H: Copy> {
    // nodes[0] is the root; every other entry is reachable from it.
    nodes: Vec<Node<T, H>>,
    max_depth: usize,
}

impl<T: Scalar, H: Copy> QuadTree<T, H> {
    /// Create a tree covering `area` at level 0 with the default depth cap.
    ///
    /// The area is not checked. An inverted area never subdivides, so every
    /// item stays at the root; use [`from_config`](Self::from_config) to reject it.
    pub fn new(area: Rect<T>) -> Self {
        Self::with_config(TreeConfig::new(area))
    }

    /// Create a tree from a validated config.
    pub fn from_config(config: TreeConfig<T>) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: TreeConfig<T>) -> Self {
        Self {
            nodes: alloc::vec![Node::new(config.area, config.level)],
            max_depth: config.max_depth,
        }
    }

    /// Reinitialise with a new area and root level, dropping all content.
    ///
    /// Like [`new`](Self::new), the area is not checked.
    pub fn create(&mut self, area: Rect<T>, level: usize) {
        debug!(?area, level, "creating quad tree root");
        self.nodes.clear();
        self.nodes.push(Node::new(area, level));
    }

    /// Change the root area, dropping all content and recomputing quadrants.
    pub fn resize(&mut self, area: Rect<T>) {
        let level = self.level();
        self.create(area, level);
    }

    /// Drop every item and every child node.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), "clearing quad tree");
        self.nodes.truncate(1);
        let root = &mut self.nodes[NodeId::ROOT.idx()];
        root.items.clear();
        root.children = [None; 4];
    }

    /// Area covered by the root.
    pub fn area(&self) -> Rect<T> {
        self.root().area
    }

    /// Level label of the root.
    pub fn level(&self) -> usize {
        self.root().level
    }

    /// Subdivision cap below the root.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the subdivision cap. Already placed items stay where they are.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Number of stored entries.
    pub fn size(&self) -> usize {
        self.nodes.iter().map(|n| n.items.len()).sum()
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest existing node below the root.
    pub fn depth(&self) -> usize {
        let root_level = self.level();
        self.nodes
            .iter()
            .map(|n| n.level - root_level)
            .max()
            .unwrap_or(0)
    }

    /// Place `item` at the deepest node whose quadrants no longer contain `rect`.
    pub fn insert(&mut self, item: H, rect: Rect<T>) -> Location {
        let root_level = self.level();
        let mut id = NodeId::ROOT;
        loop {
            let node = &self.nodes[id.idx()];
            let Some(quadrant) = node.child_areas.iter().position(|a| a.contains(&rect)) else {
                break;
            };
            if node.level - root_level >= self.max_depth {
                trace!(level = node.level, "depth cap reached, keeping item at capped node");
                break;
            }
            let existing = node.children[quadrant];
            id = match existing {
                Some(child) => child,
                None => self.spawn_child(id, quadrant),
            };
        }
        let items = &mut self.nodes[id.idx()].items;
        items.push((item, rect));
        Location {
            node: id,
            slot: items.len() - 1,
        }
    }

    fn spawn_child(&mut self, parent: NodeId, quadrant: usize) -> NodeId {
        let p = &self.nodes[parent.idx()];
        let child = Node::new(p.child_areas[quadrant], p.level + 1);
        let id = NodeId::new(self.nodes.len());
        trace!(level = child.level, quadrant, "spawning quad tree node");
        self.nodes.push(child);
        self.nodes[parent.idx()].children[quadrant] = Some(id);
        id
    }

    /// Handles whose rectangle overlaps `query`.
    ///
    /// Order: a node's own entries, then its children north-west, north-east,
    /// south-west, south-east.
    ///
    /// A child whose area lies inside `query` is collected whole, without
    /// testing each entry. For zero-area rectangles this differs from
    /// [`Rect::overlaps`]: a point on the query's edge is reported when it sits
    /// in such a child, and a zero-area `query` never reports the item
    /// inserted with that same rectangle.
    pub fn find(&self, query: &Rect<T>) -> Vec<H> {
        let mut out = Vec::new();
        self.find_into(query, &mut out);
        out
    }

    /// Like [`find`](Self::find), appending to `out`.
    pub fn find_into(&self, query: &Rect<T>, out: &mut Vec<H>) {
        self.find_in(NodeId::ROOT, query, out);
    }

    fn find_in(&self, id: NodeId, query: &Rect<T>, out: &mut Vec<H>) {
        let node = &self.nodes[id.idx()];
        out.extend(
            node.items
                .iter()
                .filter(|(_, rect)| query.overlaps(rect))
                .map(|&(item, _)| item),
        );
        for (area, child) in node.child_areas.iter().zip(node.children) {
            let Some(child) = child else {
                continue;
            };
            if query.contains(area) {
                // Everything below lies inside the query.
                self.collect_in(child, out);
            } else if query.overlaps(area) {
                self.find_in(child, query, out);
            }
        }
    }

    /// Remove the first entry equal to `item`, searching depth-first.
    pub fn remove(&mut self, item: &H) -> bool
    where
        H: PartialEq,
    {
        self.remove_in(NodeId::ROOT, item)
    }

    fn remove_in(&mut self, id: NodeId, item: &H) -> bool
    where
        H: PartialEq,
    {
        let node = &mut self.nodes[id.idx()];
        if let Some(pos) = node.items.iter().position(|(h, _)| h == item) {
            node.items.remove(pos);
            return true;
        }
        let children = node.children;
        children
            .into_iter()
            .flatten()
            .any(|child| self.remove_in(child, item))
    }

    /// Remove the entry at `location` in O(1).
    ///
    /// The node's last entry takes the vacated slot; it is reported in
    /// [`Removal::moved`] so location holders can follow it.
    pub fn remove_at(&mut self, location: Location) -> Option<Removal<T, H>> {
        let items = &mut self.nodes.get_mut(location.node.idx())?.items;
        if location.slot >= items.len() {
            return None;
        }
        let (item, rect) = items.swap_remove(location.slot);
        let moved = items.get(location.slot).map(|&(h, _)| (h, location));
        Some(Removal { item, rect, moved })
    }

    /// The entry at `location`.
    pub fn get(&self, location: Location) -> Option<(H, Rect<T>)> {
        self.nodes
            .get(location.node.idx())?
            .items
            .get(location.slot)
            .copied()
    }

    /// Area of the node holding `location`.
    pub fn area_at(&self, location: Location) -> Option<Rect<T>> {
        self.nodes.get(location.node.idx()).map(|n| n.area)
    }

    /// Every stored handle, in traversal order.
    pub fn collect_items(&self) -> Vec<H> {
        let mut out = Vec::with_capacity(self.size());
        self.collect_items_into(&mut out);
        out
    }

    /// Like [`collect_items`](Self::collect_items), appending to `out`.
    pub fn collect_items_into(&self, out: &mut Vec<H>) {
        self.collect_in(NodeId::ROOT, out);
    }

    fn collect_in(&self, id: NodeId, out: &mut Vec<H>) {
        let node = &self.nodes[id.idx()];
        out.extend(node.items.iter().map(|&(item, _)| item));
        for child in node.children.into_iter().flatten() {
            self.collect_in(child, out);
        }
    }

    /// Area of every existing node, parents before children.
    pub fn collect_areas(&self) -> Vec<Rect<T>> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.collect_areas_into(&mut out);
        out
    }

    /// Like [`collect_areas`](Self::collect_areas), appending to `out`.
    pub fn collect_areas_into(&self, out: &mut Vec<Rect<T>>) {
        self.areas_in(NodeId::ROOT, out);
    }

    fn areas_in(&self, id: NodeId, out: &mut Vec<Rect<T>>) {
        let node = &self.nodes[id.idx()];
        out.push(node.area);
        for child in node.children.into_iter().flatten() {
            self.areas_in(child, out);
        }
    }

    fn root(&self) -> &Node<T, H> {
        &self.nodes[NodeId::ROOT.idx()]
    }
}

impl<T: Scalar, H: Copy> Debug for QuadTree<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("area", &self.area())
            .field("level", &self.level())
            .field("max_depth", &self.max_depth)
            .field("nodes", &self.nodes.len())
            .field("items", &self.size())
            .finish_non_exhaustive()
    }
}
