// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized-to-absolute box mapping.
//!
//! A node's `area` is a bounding box in its parent's *local* coordinate
//! space, each axis typically in `[0, 1]`. Layout maps it into the parent's
//! absolute `pixels` rectangle with the componentwise law
//!
//! ```text
//! out.min = area.min * frame.delta() + frame.min()
//! out.max = area.max * frame.delta() + frame.min()
//! ```
//!
//! where `delta()` is `max - min` per axis. This is the only transform the
//! tree knows about; general affine transforms are out of scope.

use kurbo::Rect;

/// Maps a normalized `area` box into an absolute `frame` rectangle.
///
/// Degenerate areas (`min == max` on an axis) collapse the result to a line
/// or point on that axis; inverted areas (`min > max`) produce an inverted
/// result. Neither is an error — callers own the `min <= max` convention.
#[inline]
#[must_use]
pub fn map_to_frame(area: Rect, frame: Rect) -> Rect {
    let dx = frame.x1 - frame.x0;
    let dy = frame.y1 - frame.y0;
    Rect::new(
        area.x0 * dx + frame.x0,
        area.y0 * dy + frame.y0,
        area.x1 * dx + frame.x0,
        area.y1 * dy + frame.y0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_area_fills_frame() {
        let frame = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(map_to_frame(Rect::new(0.0, 0.0, 1.0, 1.0), frame), frame);
    }

    #[test]
    fn half_area_maps_affinely() {
        let frame = Rect::new(100.0, 0.0, 300.0, 100.0);
        let out = map_to_frame(Rect::new(0.25, 0.5, 0.75, 1.0), frame);
        assert_eq!(out, Rect::new(150.0, 50.0, 250.0, 100.0));
    }

    #[test]
    fn degenerate_area_collapses_to_point() {
        let frame = Rect::new(0.0, 0.0, 640.0, 480.0);
        let out = map_to_frame(Rect::new(0.5, 0.5, 0.5, 0.5), frame);
        assert_eq!(out, Rect::new(320.0, 240.0, 320.0, 240.0));
    }

    #[test]
    fn area_outside_unit_box_extrapolates() {
        // Areas are "typically" in [0, 1] but nothing clamps them.
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        let out = map_to_frame(Rect::new(-0.5, 0.0, 1.5, 1.0), frame);
        assert_eq!(out, Rect::new(-50.0, 0.0, 150.0, 100.0));
    }
}
