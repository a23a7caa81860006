// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::id::{INVALID, NodeId};
use super::store::NodeStore;

/// An iterator over the direct children of a node, in rendering order.
///
/// Created by [`NodeStore::children`].
#[derive(Debug)]
pub struct Children<'a> {
    store: &'a NodeStore,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(store: &'a NodeStore, first: u32) -> Self {
        Self {
            store,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.store.next_sibling[idx as usize];
        Some(NodeId {
            idx,
            generation: self.store.generation[idx as usize],
        })
    }
}

impl NodeStore {
    /// Returns the depth-first pre-order of all live nodes as raw slot
    /// indices, rebuilding the cached order if the topology changed.
    ///
    /// This is the order a renderer draws in; pair the indices with
    /// [`pixels_at`](Self::pixels_at) to place geometry without per-node
    /// generation checks.
    pub fn draw_order(&mut self) -> &[u32] {
        if self.draw_order_dirty {
            self.rebuild_draw_order();
            self.draw_order_dirty = false;
        }
        &self.draw_order
    }

    /// Rebuilds the depth-first pre-order traversal of all live nodes.
    fn rebuild_draw_order(&mut self) {
        self.draw_order.clear();
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                self.dfs_collect(idx);
            }
        }
    }

    /// Depth-first pre-order collection starting from `idx`.
    fn dfs_collect(&mut self, idx: u32) {
        self.draw_order.push(idx);
        let mut child = self.first_child[idx as usize];
        while child != INVALID {
            self.dfs_collect(child);
            child = self.next_sibling[child as usize];
        }
    }
}
