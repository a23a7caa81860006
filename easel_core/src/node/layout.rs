// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout propagation.
//!
//! [`resize`](NodeStore::resize) converts normalized areas into absolute
//! pixel rectangles, top-down: a node's `pixels` is its `area` mapped into
//! the parent's `pixels` (see [`geom::map_to_frame`](crate::geom::map_to_frame)),
//! and every child is then laid out against the freshly computed rectangle,
//! in order.
//!
//! The pass is unconditional — there is no incremental invalidation, and a
//! single call at the root with the canvas rectangle recomputes the whole
//! tree. Calling `resize` on a non-root node is permitted (it lays out that
//! subtree against whatever rectangle is passed), but unless its ancestors
//! were resized first the result reflects a stale frame.

use kurbo::Rect;

use crate::geom::map_to_frame;

use super::id::{INVALID, NodeId};
use super::store::NodeStore;

impl NodeStore {
    /// Lays out the subtree rooted at `id` against `parent_pixels`.
    ///
    /// For the root, `parent_pixels` is the absolute device/canvas rectangle.
    /// The only observable effect is the mutation of `pixels` across the
    /// subtree. Degenerate areas (`min == max`) collapse the rectangle to a
    /// point and propagate unchanged — not an error.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn resize(&mut self, id: NodeId, parent_pixels: Rect) {
        self.validate(id);
        self.resize_at(id.idx, parent_pixels);
    }

    fn resize_at(&mut self, idx: u32, parent_pixels: Rect) {
        let pixels = map_to_frame(self.area[idx as usize], parent_pixels);
        self.pixels[idx as usize] = pixels;

        let mut child = self.first_child[idx as usize];
        while child != INVALID {
            self.resize_at(child, pixels);
            child = self.next_sibling[child as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_fills_canvas() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let canvas = Rect::new(0.0, 0.0, 800.0, 600.0);

        store.resize(root, canvas);
        assert_eq!(store.pixels(root), canvas);
    }

    #[test]
    fn child_maps_into_parent_pixels() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let child = store.create_node(Rect::new(0.5, 0.0, 1.0, 0.5));
        store.add_child(root, child);

        store.resize(root, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(store.pixels(child), Rect::new(100.0, 0.0, 200.0, 50.0));
    }

    #[test]
    fn grandchild_uses_child_pixels_as_reference() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let child = store.create_node(Rect::new(0.0, 0.0, 0.5, 0.5));
        let grandchild = store.create_node(Rect::new(0.5, 0.5, 1.0, 1.0));
        store.add_child(root, child);
        store.add_child(child, grandchild);

        store.resize(root, Rect::new(0.0, 0.0, 400.0, 400.0));

        // child: lower-left quadrant of the canvas.
        assert_eq!(store.pixels(child), Rect::new(0.0, 0.0, 200.0, 200.0));
        // grandchild: upper-right quadrant of the child's rectangle.
        assert_eq!(
            store.pixels(grandchild),
            Rect::new(100.0, 100.0, 200.0, 200.0)
        );
    }

    #[test]
    fn offset_canvas_translates() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let child = store.create_node(Rect::new(0.25, 0.25, 0.75, 0.75));
        store.add_child(root, child);

        store.resize(root, Rect::new(50.0, 100.0, 150.0, 300.0));
        assert_eq!(store.pixels(child), Rect::new(75.0, 150.0, 125.0, 250.0));
    }

    #[test]
    fn degenerate_area_propagates_a_point() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let point = store.create_node(Rect::new(0.5, 0.5, 0.5, 0.5));
        let below = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        store.add_child(root, point);
        store.add_child(point, below);

        store.resize(root, Rect::new(0.0, 0.0, 100.0, 100.0));

        let collapsed = Rect::new(50.0, 50.0, 50.0, 50.0);
        assert_eq!(store.pixels(point), collapsed);
        // A point frame has zero delta, so descendants collapse onto it too.
        assert_eq!(store.pixels(below), collapsed);
    }

    #[test]
    fn resize_again_after_set_area() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let child = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        store.add_child(root, child);
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);

        store.resize(root, canvas);
        assert_eq!(store.pixels(child), canvas);

        store.set_area(child, Rect::new(0.0, 0.0, 0.5, 0.5));
        store.resize(root, canvas);
        assert_eq!(store.pixels(child), Rect::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn siblings_lay_out_independently() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let left = store.create_node(Rect::new(0.0, 0.0, 0.5, 1.0));
        let right = store.create_node(Rect::new(0.5, 0.0, 1.0, 1.0));
        store.add_child(root, left);
        store.add_child(root, right);

        store.resize(root, Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(store.pixels(left), Rect::new(0.0, 0.0, 320.0, 480.0));
        assert_eq!(store.pixels(right), Rect::new(320.0, 0.0, 640.0, 480.0));
    }
}
