// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-axis management.
//!
//! Each node keeps its own keyframe timestamps (`times`, non-decreasing,
//! starting at `0.0`) and a `time_span` — the maximum time ever registered
//! anywhere in its subtree. Registration bubbles the new time up the whole
//! ancestor chain on every call, so a root's span always covers everything
//! below it regardless of where data was ingested.
//!
//! [`frame_index`](NodeStore::frame_index) answers the rendering-side query:
//! given a continuous display time, where between two consecutive keyframes
//! does it fall? The integer part of the result selects the lower keyframe
//! and the fraction is the blend weight toward the next one.

use crate::error::FrameOrderError;

use super::id::{INVALID, NodeId};
use super::store::NodeStore;

impl NodeStore {
    /// Registers a keyframe timestamp on this node's own timeline.
    ///
    /// `time` must not be older than the node's newest keyframe; equal
    /// timestamps are accepted. On success the time is appended and the
    /// `time_span` of this node and every ancestor is raised to cover it.
    ///
    /// # Errors
    ///
    /// Returns [`FrameOrderError`] if `time` is strictly less than the last
    /// registered timestamp. The node (and every span) is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn add_frame_time(&mut self, id: NodeId, time: f64) -> Result<(), FrameOrderError> {
        self.validate(id);
        let idx = id.idx as usize;
        // The timeline is never empty (it starts at 0.0).
        let last = self.times[idx].last().copied().unwrap_or(0.0);
        if time < last {
            return Err(FrameOrderError {
                last,
                rejected: time,
            });
        }
        self.times[idx].push(time);
        self.update_time_span(id.idx, time);
        Ok(())
    }

    /// Raises `time_span` to at least `time` for `idx` and every ancestor.
    ///
    /// The walk always continues to the root, even when no ancestor's span
    /// actually changes.
    pub(super) fn update_time_span(&mut self, idx: u32, time: f64) {
        let mut cur = idx;
        loop {
            if time > self.time_span[cur as usize] {
                self.time_span[cur as usize] = time;
            }
            let parent = self.parent[cur as usize];
            if parent == INVALID {
                break;
            }
            cur = parent;
        }
    }

    /// Maps a continuous query time to a fractional index into this node's
    /// own timeline.
    ///
    /// The query is clipped into `[0, time_span]`, then the timeline is
    /// binary-searched for the first keyframe `>=` the clipped time. A query
    /// at or before the first keyframe returns `0.0`; otherwise the result is
    /// `(i - 1) + w` where `w` interpolates between keyframes `i - 1` and
    /// `i`. When the subtree span extends past this node's own last keyframe
    /// (a descendant registered a later time), queries beyond the local
    /// timeline hold on the final keyframe index.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn frame_index(&self, id: NodeId, time: f64) -> f64 {
        self.validate(id);
        let idx = id.idx as usize;

        // Clip the query into the subtree's registered range.
        let span = self.time_span[idx];
        let clipped = if time < 0.0 {
            0.0
        } else if time > span {
            span
        } else {
            time
        };

        let times = &self.times[idx];
        let i = times.partition_point(|&t| t < clipped);
        if i == 0 {
            return 0.0;
        }
        if i == times.len() {
            // The span outran the local timeline; hold on the last keyframe.
            return (times.len() - 1) as f64;
        }

        let delta_t = times[i] - times[i - 1];
        let w = (clipped - times[i - 1]) / delta_t;
        (i - 1) as f64 + w
    }
}
