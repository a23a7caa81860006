// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! The crate has exactly one recoverable failure:
//! [`NodeStore::add_frame_time`](crate::node::NodeStore::add_frame_time)
//! rejects a timestamp older than the node's newest keyframe. The caller (an
//! animation-data loader) decides whether to skip, abort, or log; nothing is
//! retried or recovered internally, and the node is left unchanged.
//!
//! Programmer mistakes — stale [`NodeId`](crate::node::NodeId) handles,
//! attaching a child that already has a parent — panic instead, as they do
//! throughout the store API.

use core::fmt;

/// A keyframe timestamp was older than the newest one already registered.
///
/// Returned by [`NodeStore::add_frame_time`](crate::node::NodeStore::add_frame_time).
/// Equal timestamps are accepted; only a strictly decreasing insert fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOrderError {
    /// The newest timestamp already in the node's timeline.
    pub last: f64,
    /// The rejected timestamp.
    pub rejected: f64,
}

impl fmt::Display for FrameOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame time {} is older than the newest registered frame time {}",
            self.rejected, self.last
        )
    }
}

impl core::error::Error for FrameOrderError {}
