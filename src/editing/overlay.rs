// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Screen-space layout of the crop overlay
//!
//! The overlay covers the visible image with four darkened bands around
//! the crop frame:
//!
//! ```text
//! +---------------------------+
//! |        shadow_top         |
//! +------+-----------+--------+
//! | left |   frame   | right  |
//! +------+-----------+--------+
//! |       shadow_bottom       |
//! +---------------------------+
//! ```

use kurbo::Rect;

/// Rectangles the host draws for the crop overlay (screen space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// Whole overlay area (the visible image)
    pub area: Rect,
    /// The crop frame itself
    pub frame: Rect,
    pub shadow_top: Rect,
    pub shadow_bottom: Rect,
    pub shadow_left: Rect,
    pub shadow_right: Rect,
}

impl OverlayLayout {
    /// Lay out the overlay for a crop `frame` inside `area`
    pub fn new(area: Rect, frame: Rect) -> Self {
        let top = frame.y0.max(area.y0);
        let bottom = frame.y1.min(area.y1).max(top);

        Self {
            area,
            frame,
            shadow_top: band(area.x0, area.y0, area.x1, top),
            shadow_bottom: band(area.x0, bottom, area.x1, area.y1),
            shadow_left: band(area.x0, top, frame.x0, bottom),
            shadow_right: band(frame.x1, top, area.x1, bottom),
        }
    }

    /// The four shadow bands, top, left, right, bottom
    pub fn shadows(&self) -> [Rect; 4] {
        [
            self.shadow_top,
            self.shadow_left,
            self.shadow_right,
            self.shadow_bottom,
        ]
    }
}

/// Ring around the crop frame where the grab handles live
///
/// Host tools that overlap `outer` but are not fully inside `inner`
/// would cover a handle and should be hidden while cropping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabZone {
    pub outer: Rect,
    pub inner: Rect,
}

impl GrabZone {
    pub fn new(frame: Rect, radius: f64) -> Self {
        let inner = frame.inflate(-radius, -radius);
        // A frame thinner than two radii has no inner area
        let inner = if inner.width() < 0.0 || inner.height() < 0.0 {
            Rect::from_center_size(frame.center(), kurbo::Size::ZERO)
        } else {
            inner
        };
        Self {
            outer: frame.inflate(radius, radius),
            inner,
        }
    }

    /// True when a tool at `rect` would cover part of the handle ring
    pub fn overlaps(&self, rect: Rect) -> bool {
        let touches_outer = rect.x0 < self.outer.x1
            && rect.x1 > self.outer.x0
            && rect.y0 < self.outer.y1
            && rect.y1 > self.outer.y0;
        let inside_inner = rect.x0 >= self.inner.x0
            && rect.x1 <= self.inner.x1
            && rect.y0 >= self.inner.y0
            && rect.y1 <= self.inner.y1;
        touches_outer && !inside_inner
    }
}

/// Rect with non-negative size; inverted extents collapse to zero
fn band(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
    Rect::new(x0, y0, x1.max(x0), y1.max(y0))
}
