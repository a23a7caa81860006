// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable tree output.
//!
//! [`dump_tree`] writes one line per node, indented by depth, to a
//! [`Write`](std::io::Write) destination. Rectangles are printed as
//! `x0,y0..x1,y1`; the pixel rectangle is whatever the last
//! [`resize`](easel_core::node::NodeStore::resize) pass left behind and is
//! stale before the first pass.

use std::io::{self, Write};

use easel_core::node::{NodeId, NodeStore};
use kurbo::Rect;

fn fmt_rect(r: Rect) -> String {
    format!("{},{}..{},{}", r.x0, r.y0, r.x1, r.y1)
}

fn dump_node<W: Write>(
    store: &NodeStore,
    id: NodeId,
    depth: usize,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(
        writer,
        "{:indent$}[{}] area={} pixels={} keyframes={} span={}",
        "",
        id.index(),
        fmt_rect(store.area(id)),
        fmt_rect(store.pixels(id)),
        store.frame_times(id).len(),
        store.time_span(id),
        indent = depth * 2,
    )?;
    for child in store.children(id) {
        dump_node(store, child, depth + 1, writer)?;
    }
    Ok(())
}

/// Writes an indented one-line-per-node dump of the subtree rooted at `id`.
///
/// # Errors
///
/// Propagates any I/O error from the destination.
///
/// # Panics
///
/// Panics if the handle is stale.
pub fn dump_tree<W: Write>(store: &NodeStore, id: NodeId, writer: &mut W) -> io::Result<()> {
    dump_node(store, id, 0, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_is_one_line_per_node_in_draw_order() {
        let mut store = NodeStore::new();
        let root = store.create_node(Rect::new(0.0, 0.0, 1.0, 1.0));
        let left = store.create_node(Rect::new(0.0, 0.0, 0.5, 1.0));
        let right = store.create_node(Rect::new(0.5, 0.0, 1.0, 1.0));
        store.add_child(root, left);
        store.add_child(root, right);
        store.resize(root, Rect::new(0.0, 0.0, 100.0, 100.0));
        store.add_frame_time(left, 2.0).unwrap();

        let mut out = Vec::new();
        dump_tree(&store, root, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3, "one line per node:\n{text}");
        assert!(lines[0].starts_with('['), "root is unindented:\n{text}");
        assert!(lines[1].starts_with("  ["), "children indented:\n{text}");
        assert!(
            lines[0].contains("span=2"),
            "span bubbled to the root line:\n{text}"
        );
        assert!(
            lines[1].contains("pixels=0,0..50,100"),
            "left child pixels:\n{text}"
        );
    }
}
