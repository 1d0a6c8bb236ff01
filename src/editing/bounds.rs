// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Edge-based rectangle storage
//!
//! The crop region is held as four independent edges rather than an
//! origin + size, so a drag can move one edge without touching the others.

use super::side::Side;
use kurbo::Rect;

/// Four edges of a region in image space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left: rect.x0,
            right: rect.x1,
            top: rect.y0,
            bottom: rect.y1,
        }
    }

    /// Get the coordinate of one edge
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    /// Set the coordinate of one edge
    pub fn set(&mut self, side: Side, value: f64) {
        match side {
            Side::Left => self.left = value,
            Side::Right => self.right = value,
            Side::Top => self.top = value,
            Side::Bottom => self.bottom = value,
        }
    }

    /// Swap an edge with its opposite and return the opposite side
    ///
    /// After the swap the opposite side holds the coordinate the dragged
    /// edge had, so the drag keeps tracking the pointer through it.
    pub fn flip(&mut self, side: Side) -> Side {
        let opposite = side.opposite();
        let value = self.get(side);
        self.set(side, self.get(opposite));
        self.set(opposite, value);
        opposite
    }

    /// Collapse to a zero-size rectangle at `(x, y)`
    pub fn collapse_to(&mut self, x: f64, y: f64) {
        self.left = x;
        self.right = x;
        self.top = y;
        self.bottom = y;
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when left <= right and top <= bottom
    pub fn is_normalized(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
