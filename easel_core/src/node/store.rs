// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation, topology, and property
//! management.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use super::id::{INVALID, NodeId};
use super::traverse::Children;

/// Struct-of-arrays storage for all nodes.
///
/// Nodes are addressed by [`NodeId`] handles. Internally, each node occupies
/// a slot in parallel arrays. Destroyed nodes are recycled via a free list,
/// and generation counters prevent stale handle access.
///
/// The store is the single owner of every node; teardown of a subtree is
/// structural recursion over the index links, with no shared ownership and no
/// cycle-breaking logic.
#[derive(Debug)]
pub struct NodeStore {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Local properties (set by callers) --
    pub(crate) area: Vec<Rect>,
    pub(crate) times: Vec<Vec<f64>>,

    // -- Computed properties --
    pub(crate) pixels: Vec<Rect>,
    pub(crate) time_span: Vec<f64>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Traversal cache --
    pub(crate) draw_order: Vec<u32>,
    pub(crate) draw_order_dirty: bool,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore {
    /// Creates an empty node store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            area: Vec::new(),
            times: Vec::new(),
            pixels: Vec::new(),
            time_span: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            draw_order: Vec::new(),
            draw_order_dirty: true,
        }
    }

    // -- Allocation API --

    /// Creates a new node with the given normalized area and returns its
    /// handle.
    ///
    /// The node starts detached (no parent), with a zero `pixels` rectangle
    /// (stale until the first [`resize`](Self::resize) pass reaches it), a
    /// timeline of the single keyframe `0.0`, and a `time_span` of `0.0`.
    pub fn create_node(&mut self, area: Rect) -> NodeId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.parent[idx as usize] = INVALID;
            self.first_child[idx as usize] = INVALID;
            self.next_sibling[idx as usize] = INVALID;
            self.prev_sibling[idx as usize] = INVALID;
            self.area[idx as usize] = area;
            self.times[idx as usize] = vec![0.0];
            self.pixels[idx as usize] = Rect::ZERO;
            self.time_span[idx as usize] = 0.0;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.area.push(area);
            self.times.push(vec![0.0]);
            self.pixels.push(Rect::ZERO);
            self.time_span.push(0.0);
            self.generation.push(0);
            idx
        };

        self.draw_order_dirty = true;

        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a node and its entire subtree, freeing the slots for reuse.
    ///
    /// Teardown is depth-first; every handle into the subtree becomes stale.
    /// Ancestor `time_span` values are untouched — a subtree's registered
    /// times remain part of the span history above it.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_node(&mut self, id: NodeId) {
        self.validate(id);
        if self.parent[id.idx as usize] != INVALID {
            self.unlink_from_parent(id.idx);
        }
        self.free_subtree(id.idx);
        self.draw_order_dirty = true;
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    // -- Topology API --

    /// Adds `child` as the last child of `parent`, transferring it into the
    /// parent's subtree.
    ///
    /// If the child (or its descendants) already registered frame times, the
    /// child's `time_span` is folded into the new ancestor chain so that a
    /// node's span stays ≥ every time registered at or below it regardless of
    /// assembly order.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `child` already has a parent.
    /// Reparenting is unsupported.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.validate(parent);
        self.validate(child);
        let p = parent.idx;
        let c = child.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );

        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        self.update_time_span(p, self.time_span[c as usize]);
        self.draw_order_dirty = true;
    }

    /// Returns the parent of a node, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        if p == INVALID {
            None
        } else {
            Some(NodeId {
                idx: p,
                generation: self.generation[p as usize],
            })
        }
    }

    /// Returns an iterator over the direct children of a node, in rendering
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the root nodes (those with no parent).
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        let mut roots = Vec::new();
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                roots.push(NodeId {
                    idx,
                    generation: self.generation[idx as usize],
                });
            }
        }
        roots
    }

    // -- Property getters --

    /// Returns the normalized area of a node, in its parent's coordinate
    /// space.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn area(&self, id: NodeId) -> Rect {
        self.validate(id);
        self.area[id.idx as usize]
    }

    /// Returns the absolute pixel rectangle of a node.
    ///
    /// Only valid after a [`resize`](Self::resize) pass starting at the root
    /// has reached this node; stale before that.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn pixels(&self, id: NodeId) -> Rect {
        self.validate(id);
        self.pixels[id.idx as usize]
    }

    /// Returns the node's own keyframe timestamps, in non-decreasing order.
    ///
    /// The timeline always starts at `0.0`. It holds only this node's own
    /// keyframes; descendants' times contribute to
    /// [`time_span`](Self::time_span) instead.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn frame_times(&self, id: NodeId) -> &[f64] {
        self.validate(id);
        &self.times[id.idx as usize]
    }

    /// Returns the maximum time ever registered anywhere in this node's
    /// subtree, including itself.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn time_span(&self, id: NodeId) -> f64 {
        self.validate(id);
        self.time_span[id.idx as usize]
    }

    // -- Mutation API --

    /// Replaces the normalized area of a node.
    ///
    /// The node's `pixels` (and its descendants') are stale until the next
    /// [`resize`](Self::resize) pass.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn set_area(&mut self, id: NodeId, area: Rect) {
        self.validate(id);
        self.area[id.idx as usize] = area;
    }

    // -- Raw-index accessors for renderers --
    //
    // These accept raw slot indices (as found in `draw_order()`) rather than
    // `NodeId` handles, skipping generation validation. Only use with indices
    // that came from `draw_order()`.

    /// Returns the absolute pixel rectangle at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn pixels_at(&self, idx: u32) -> Rect {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.pixels[idx as usize]
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(super) fn validate(&self, id: NodeId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale NodeId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Removes `idx` from its parent's child list.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }

    /// Depth-first teardown of the subtree rooted at `idx`.
    ///
    /// Assumes `idx` is already detached from any parent.
    fn free_subtree(&mut self, idx: u32) {
        let mut child = self.first_child[idx as usize];
        while child != INVALID {
            // Read the sibling link before the child slot is reset.
            let next = self.next_sibling[child as usize];
            self.free_subtree(child);
            child = next;
        }

        self.parent[idx as usize] = INVALID;
        self.first_child[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.times[idx as usize] = Vec::new();

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
    }
}
