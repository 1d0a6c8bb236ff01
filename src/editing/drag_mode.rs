// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! What a drag on the crop region affects

use super::bounds::Bounds;
use super::side::{Side, XSide, YSide};
use kurbo::Point;

/// The part of the region a drag operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// No drag in progress
    #[default]
    None,
    /// Move the whole region, keeping its size
    Whole,
    /// Start a fresh region at the press point; grows from its
    /// bottom-right corner
    NewCrop,
    /// Resize a single edge
    Edge(Side),
    /// Resize two adjacent edges at once
    Corner { x: XSide, y: YSide },
}

impl DragMode {
    /// The x-axis edge this mode resizes, if any
    pub fn x_side(self) -> Option<XSide> {
        match self {
            DragMode::Edge(side) => side.as_x(),
            DragMode::Corner { x, .. } => Some(x),
            DragMode::NewCrop => Some(XSide::Right),
            DragMode::None | DragMode::Whole => None,
        }
    }

    /// The y-axis edge this mode resizes, if any
    pub fn y_side(self) -> Option<YSide> {
        match self {
            DragMode::Edge(side) => side.as_y(),
            DragMode::Corner { y, .. } => Some(y),
            DragMode::NewCrop => Some(YSide::Bottom),
            DragMode::None | DragMode::Whole => None,
        }
    }

    /// Build an edge or corner mode from per-axis sides
    pub fn from_sides(x: Option<XSide>, y: Option<YSide>) -> Self {
        match (x, y) {
            (Some(x), Some(y)) => DragMode::Corner { x, y },
            (Some(x), None) => DragMode::Edge(x.into()),
            (None, Some(y)) => DragMode::Edge(y.into()),
            (None, None) => DragMode::None,
        }
    }

    /// CSS cursor name for this mode
    pub fn cursor_style(self) -> String {
        match self {
            DragMode::None => "default".to_string(),
            DragMode::Whole => "move".to_string(),
            DragMode::NewCrop => "crop".to_string(),
            DragMode::Edge(side) => format!("{}-resize", side.cursor_letter()),
            DragMode::Corner { x, y } => {
                format!("{}{}-resize", y.cursor_letter(), x.cursor_letter())
            }
        }
    }
}

/// Classify a point (image space) against the region
///
/// `radius` is the grab distance in image space. Corners win over edges,
/// edges win over the interior. Corners are tried top-left, bottom-left,
/// top-right, bottom-right; the first hit is returned.
pub fn classify(bounds: &Bounds, pt: Point, radius: f64) -> DragMode {
    let radius_sq = radius * radius;
    let near = |cx: f64, cy: f64| {
        let dx = pt.x - cx;
        let dy = pt.y - cy;
        dx * dx + dy * dy <= radius_sq
    };

    let corners = [
        (XSide::Left, YSide::Top),
        (XSide::Left, YSide::Bottom),
        (XSide::Right, YSide::Top),
        (XSide::Right, YSide::Bottom),
    ];
    for (x, y) in corners {
        if near(bounds.get(x.into()), bounds.get(y.into())) {
            return DragMode::Corner { x, y };
        }
    }

    let x_between = bounds.left <= pt.x && pt.x <= bounds.right;
    let y_between = bounds.top <= pt.y && pt.y <= bounds.bottom;

    if y_between && (pt.x - bounds.left).abs() <= radius {
        DragMode::Edge(Side::Left)
    } else if y_between && (pt.x - bounds.right).abs() <= radius {
        DragMode::Edge(Side::Right)
    } else if x_between && (pt.y - bounds.top).abs() <= radius {
        DragMode::Edge(Side::Top)
    } else if x_between && (pt.y - bounds.bottom).abs() <= radius {
        DragMode::Edge(Side::Bottom)
    } else if x_between && y_between {
        DragMode::Whole
    } else {
        DragMode::NewCrop
    }
}
