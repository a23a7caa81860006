// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree dumps and diagnostics for the easel node tree.
//!
//! This crate provides development-time views of an
//! [`easel_core::node::NodeStore`]:
//!
//! - [`pretty::dump_tree`] — human-readable one-line-per-node output showing
//!   each node's area, pixel rectangle, keyframe count, and subtree span.

pub mod pretty;
