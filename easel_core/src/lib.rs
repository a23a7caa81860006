// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-and-timing node tree for the easel visualization toolkit.
//!
//! `easel_core` provides the node abstraction that the rest of the toolkit
//! hangs geometry off: an ordered tree of drawable regions, each with a
//! normalized area in its parent's coordinate space and a per-node keyframe
//! timeline. It is `no_std` compatible (with `alloc`) and stores nodes in
//! struct-of-arrays layout with index handles for cache-friendly traversal.
//!
//! # Architecture
//!
//! Two passes flow through the tree, driven by external collaborators:
//!
//! ```text
//!   tree builder ──► NodeStore (create_node / add_child / set_area)
//!                        │
//!      canvas rect ──► resize() ──► pixels per node ──► renderer
//!                        │
//!   animation data ──► add_frame_time() ──► time_span per subtree
//!                        │
//!      display time ──► frame_index() ──► fractional keyframe index
//! ```
//!
//! **[`node`]** — Struct-of-arrays node tree with generational handles.
//! The normalized `area` and keyframe `times` are set by the caller; the
//! absolute `pixels` rectangle and subtree `time_span` are computed.
//!
//! **[`geom`]** — The min/max box mapping that converts a normalized area
//! into an absolute rectangle within a parent frame.
//!
//! **[`error`]** — The single failure mode of the crate: registering a
//! keyframe older than a node's newest one.
//!
//! Everything a plotting library otherwise contains — geometry generation,
//! axis rendering, color mapping, backend drawing, export — consumes the
//! `pixels` rectangles and frame indices computed here and lives outside
//! this crate.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod error;
pub mod geom;
pub mod node;
