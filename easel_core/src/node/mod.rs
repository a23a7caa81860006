// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node tree data model.
//!
//! A *node* is a drawable region in the toolkit's layout tree. Each node has:
//!
//! - An identity ([`NodeId`]) — a generational handle that becomes stale when
//!   the node is destroyed, preventing use-after-free bugs at the API level.
//! - Topology — parent, first-child, and sibling links forming an ordered
//!   tree. Child order is rendering order and is preserved.
//! - **Local properties** set by the caller: the normalized
//!   [`area`](NodeStore::area) within the parent's coordinate space and the
//!   node's own keyframe [`times`](NodeStore::frame_times).
//! - **Computed properties**: the absolute [`pixels`](NodeStore::pixels)
//!   rectangle (written by [`resize`](NodeStore::resize)) and the subtree
//!   [`time_span`](NodeStore::time_span) (raised by
//!   [`add_frame_time`](NodeStore::add_frame_time) along the ancestor chain).
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles for
//! cache-friendly traversal. Index links double as the non-owning parent
//! back-reference: the store owns every node, so walking upward during time
//! span propagation never touches lifetime.

mod frames;
mod id;
mod layout;
mod store;
mod traverse;

pub use id::{INVALID, NodeId};
pub use store::NodeStore;
pub use traverse::Children;
