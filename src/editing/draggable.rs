// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Draggable crop rectangle
//!
//! `DraggableRect` owns the region's edges and decides what a press does
//! (move, resize an edge or corner, or start a new region). A press that
//! lands on the editable area yields a [`DragHandler`]; feeding it pointer
//! positions mutates the rectangle until the caller drops it.

use super::bounds::Bounds;
use super::drag_mode::{self, DragMode};
use super::side::{Side, XSide, YSide};
use super::viewport::ViewportMapping;
use kurbo::{Point, Rect, Size, Vec2};

/// A rectangle over the image that can be moved and resized by dragging
#[derive(Debug, Clone)]
pub struct DraggableRect<V> {
    bounds: Bounds,
    viewport: V,
    /// Grab radius in screen pixels
    sensitivity: f64,
    /// Mode of the live drag; `None` when idle
    drag_mode: DragMode,
}

impl<V: ViewportMapping> DraggableRect<V> {
    /// Create a draggable rect over `rect` (image space)
    pub fn new(rect: Rect, viewport: V, sensitivity: f64) -> Self {
        Self {
            bounds: Bounds::from_rect(rect),
            viewport,
            sensitivity,
            drag_mode: DragMode::None,
        }
    }

    pub fn left(&self) -> f64 {
        self.bounds.left
    }

    pub fn right(&self) -> f64 {
        self.bounds.right
    }

    pub fn top(&self) -> f64 {
        self.bounds.top
    }

    pub fn bottom(&self) -> f64 {
        self.bounds.bottom
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Current region in image space
    pub fn rect(&self) -> Rect {
        self.bounds.to_rect()
    }

    /// Replace the region, e.g. when the host resets the crop
    pub fn set_rect(&mut self, rect: Rect) {
        self.bounds = Bounds::from_rect(rect);
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the mapping, for zoom and pan changes
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Mode of the live drag, reflecting any edge flips so far
    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_mode != DragMode::None
    }

    /// Classify a point given in image space
    pub fn classify_point(&self, pt: Point) -> DragMode {
        let radius = self.viewport.screen_to_image_size(self.sensitivity);
        drag_mode::classify(&self.bounds, pt, radius)
    }

    /// Cursor name for a pointer at `screen_pt`
    ///
    /// While dragging the live mode is used, so the cursor follows the
    /// edge that is actually being dragged after a flip.
    pub fn cursor_style(&self, screen_pt: Point, dragging: bool) -> String {
        let mode = if dragging {
            self.drag_mode
        } else {
            self.classify_point(self.viewport.screen_to_image(screen_pt))
        };
        mode.cursor_style()
    }

    /// Start a drag at `screen_pt`
    ///
    /// Returns `None` when the point lies outside the clip rectangle; the
    /// press should then be ignored.
    pub fn begin_drag(&mut self, screen_pt: Point) -> Option<DragHandler> {
        let pt = self.viewport.screen_to_image(screen_pt);
        let clip = self.viewport.image_clipped();
        if !contains_inclusive(clip, pt) {
            tracing::debug!("Drag at {:?} outside clip {:?}, ignored", pt, clip);
            return None;
        }

        self.drag_mode = self.classify_point(pt);
        tracing::debug!("Drag began at {:?}: {:?}", pt, self.drag_mode);

        let handler = match self.drag_mode {
            DragMode::Whole => DragHandler {
                bias: Vec2::new(self.bounds.left - pt.x, self.bounds.top - pt.y),
                fixed: Size::new(self.bounds.width(), self.bounds.height()),
                clip,
                new_crop_origin: None,
            },
            DragMode::NewCrop => DragHandler {
                bias: Vec2::new(self.bounds.right - pt.x, self.bounds.bottom - pt.y),
                fixed: Size::ZERO,
                clip,
                new_crop_origin: Some(pt),
            },
            mode => {
                let bias_x = mode
                    .x_side()
                    .map_or(0.0, |side| self.bounds.get(side.into()) - pt.x);
                let bias_y = mode
                    .y_side()
                    .map_or(0.0, |side| self.bounds.get(side.into()) - pt.y);
                DragHandler {
                    bias: Vec2::new(bias_x, bias_y),
                    fixed: Size::ZERO,
                    clip,
                    new_crop_origin: None,
                }
            }
        };
        Some(handler)
    }

    /// Forget the live drag mode
    pub fn end_drag(&mut self) {
        self.drag_mode = DragMode::None;
    }
}

/// Per-drag state returned by [`DraggableRect::begin_drag`]
///
/// The drag mode itself lives in the rectangle (so cursor queries can see
/// it); the handler keeps what was captured at the press.
#[derive(Debug, Clone, PartialEq)]
pub struct DragHandler {
    /// Offset from the pointer to the dragged edge(s)
    bias: Vec2,
    /// Region size kept while moving the whole region; zero otherwise
    fixed: Size,
    /// Clip rectangle captured at the press
    clip: Rect,
    /// Press point of a new-crop drag that has not been applied yet
    new_crop_origin: Option<Point>,
}

impl DragHandler {
    /// Apply a pointer position (screen space) to the rectangle
    pub fn update<V: ViewportMapping>(&mut self, rect: &mut DraggableRect<V>, screen_pt: Point) {
        if let Some(origin) = self.new_crop_origin.take() {
            rect.bounds.collapse_to(origin.x, origin.y);
            self.bias = Vec2::ZERO;
            rect.drag_mode = DragMode::Corner {
                x: XSide::Right,
                y: YSide::Bottom,
            };
            tracing::debug!("New crop started at {:?}", origin);
        }

        let x = self.convert_x(rect.viewport.screen_to_image_x(screen_pt.x));
        let y = self.convert_y(rect.viewport.screen_to_image_y(screen_pt.y));

        match rect.drag_mode {
            DragMode::None => {}
            DragMode::Whole => {
                rect.bounds.left = x;
                rect.bounds.right = x + self.fixed.width;
                rect.bounds.top = y;
                rect.bounds.bottom = y + self.fixed.height;
            }
            mode => {
                let x_side = mode.x_side().map(|side| resize_x(&mut rect.bounds, side, x));
                let y_side = mode.y_side().map(|side| resize_y(&mut rect.bounds, side, y));
                rect.drag_mode = DragMode::from_sides(x_side, y_side);
            }
        }
    }

    fn convert_x(&self, x: f64) -> f64 {
        clamp(
            x + self.bias.x,
            self.clip.x0,
            self.clip.x1 - self.fixed.width,
        )
    }

    fn convert_y(&self, y: f64) -> f64 {
        clamp(
            y + self.bias.y,
            self.clip.y0,
            self.clip.y1 - self.fixed.height,
        )
    }
}

/// Move an x edge, flipping it with its opposite if they cross.
/// Returns the side that now holds the dragged coordinate.
fn resize_x(bounds: &mut Bounds, side: XSide, x: f64) -> XSide {
    bounds.set(side.into(), x);
    if bounds.left > bounds.right {
        bounds.flip(side.into());
        tracing::debug!("Flipped {:?} edge", side);
        side.opposite()
    } else {
        side
    }
}

fn resize_y(bounds: &mut Bounds, side: YSide, y: f64) -> YSide {
    bounds.set(Side::from(side), y);
    if bounds.top > bounds.bottom {
        bounds.flip(side.into());
        tracing::debug!("Flipped {:?} edge", side);
        side.opposite()
    } else {
        side
    }
}

/// Clamp that tolerates `min > max` (lower bound wins) instead of panicking
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    rect.x0 <= pt.x && pt.x <= rect.x1 && rect.y0 <= pt.y && pt.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::viewport::ViewPort;

    /// 1:1 viewport over a 100x100 image
    fn identity_viewport() -> ViewPort {
        ViewPort::new(Size::new(100.0, 100.0), Size::new(100.0, 100.0), 1.0, Vec2::ZERO)
    }

    fn test_rect() -> DraggableRect<ViewPort> {
        DraggableRect::new(Rect::new(10.0, 10.0, 50.0, 50.0), identity_viewport(), 5.0)
    }

    #[test]
    fn corner_drag_flips_both_edges() {
        let mut rect = test_rect();
        assert_eq!(
            rect.classify_point(Point::new(10.0, 10.0)),
            DragMode::Corner { x: XSide::Left, y: YSide::Top }
        );

        let mut handler = rect.begin_drag(Point::new(10.0, 10.0)).unwrap();
        handler.update(&mut rect, Point::new(60.0, 60.0));

        assert_eq!(rect.rect(), Rect::new(50.0, 50.0, 60.0, 60.0));
        assert_eq!(
            rect.drag_mode(),
            DragMode::Corner { x: XSide::Right, y: YSide::Bottom }
        );
    }

    #[test]
    fn flipped_edge_keeps_tracking_pointer() {
        let mut rect = test_rect();
        let mut handler = rect.begin_drag(Point::new(10.0, 30.0)).unwrap();
        assert_eq!(rect.drag_mode(), DragMode::Edge(Side::Left));

        handler.update(&mut rect, Point::new(70.0, 30.0));
        assert_eq!((rect.left(), rect.right()), (50.0, 70.0));
        assert_eq!(rect.drag_mode(), DragMode::Edge(Side::Right));

        // Coming back across the fixed edge flips again
        handler.update(&mut rect, Point::new(20.0, 30.0));
        assert_eq!((rect.left(), rect.right()), (20.0, 50.0));
        assert_eq!(rect.drag_mode(), DragMode::Edge(Side::Left));

        // The y axis is untouched by a vertical edge drag
        assert_eq!((rect.top(), rect.bottom()), (10.0, 50.0));
    }

    #[test]
    fn edges_stay_ordered_after_every_update() {
        let path = [
            (0.0, 0.0),
            (95.0, 3.0),
            (-20.0, 120.0),
            (49.0, 49.0),
            (51.0, 11.0),
            (10.0, 90.0),
            (100.0, 100.0),
            (5.0, 5.0),
            (30.0, 70.0),
        ];
        for start in [
            Point::new(10.0, 10.0),
            Point::new(50.0, 30.0),
            Point::new(30.0, 50.0),
            Point::new(48.0, 12.0),
            Point::new(80.0, 80.0),
        ] {
            let mut rect = test_rect();
            let mut handler = rect.begin_drag(start).unwrap();
            for &(x, y) in &path {
                handler.update(&mut rect, Point::new(x, y));
                assert!(rect.bounds().is_normalized(), "start {start:?}, at ({x}, {y})");
            }
        }
    }

    #[test]
    fn updates_are_clamped_to_clip() {
        let mut rect = test_rect();
        let mut handler = rect.begin_drag(Point::new(50.0, 50.0)).unwrap();

        handler.update(&mut rect, Point::new(500.0, -40.0));
        assert_eq!(rect.rect(), Rect::new(10.0, 0.0, 100.0, 10.0));

        handler.update(&mut rect, Point::new(-500.0, 500.0));
        assert_eq!(rect.rect(), Rect::new(0.0, 10.0, 10.0, 100.0));
    }

    #[test]
    fn whole_drag_preserves_size() {
        let mut rect = test_rect();
        let mut handler = rect.begin_drag(Point::new(30.0, 30.0)).unwrap();
        assert_eq!(rect.drag_mode(), DragMode::Whole);

        handler.update(&mut rect, Point::new(40.0, 35.0));
        assert_eq!(rect.rect(), Rect::new(20.0, 15.0, 60.0, 55.0));

        for &(x, y) in &[(200.0, 200.0), (-100.0, 40.0), (31.0, -7.0), (65.0, 65.0)] {
            handler.update(&mut rect, Point::new(x, y));
            let r = rect.rect();
            assert_eq!(r.width(), 40.0);
            assert_eq!(r.height(), 40.0);
            assert!(r.x0 >= 0.0 && r.x1 <= 100.0);
            assert!(r.y0 >= 0.0 && r.y1 <= 100.0);
        }

        // Pushed into the far corner
        handler.update(&mut rect, Point::new(1000.0, 1000.0));
        assert_eq!(rect.rect(), Rect::new(60.0, 60.0, 100.0, 100.0));
    }

    #[test]
    fn new_crop_starts_at_press_point() {
        let mut rect = test_rect();
        let mut handler = rect.begin_drag(Point::new(70.0, 70.0)).unwrap();
        assert_eq!(rect.drag_mode(), DragMode::NewCrop);

        handler.update(&mut rect, Point::new(75.0, 75.0));
        assert_eq!(rect.rect(), Rect::new(70.0, 70.0, 75.0, 75.0));
        assert_eq!(
            rect.drag_mode(),
            DragMode::Corner { x: XSide::Right, y: YSide::Bottom }
        );

        // Dragging up-left past the press point flips to the top-left corner
        handler.update(&mut rect, Point::new(60.0, 65.0));
        assert_eq!(rect.rect(), Rect::new(60.0, 65.0, 70.0, 70.0));
        assert_eq!(
            rect.drag_mode(),
            DragMode::Corner { x: XSide::Left, y: YSide::Top }
        );
    }

    #[test]
    fn press_outside_clip_starts_nothing() {
        let mut rect = test_rect();
        assert!(rect.begin_drag(Point::new(120.0, 30.0)).is_none());
        assert!(rect.begin_drag(Point::new(30.0, -1.0)).is_none());
        assert_eq!(rect.drag_mode(), DragMode::None);
        assert_eq!(rect.rect(), Rect::new(10.0, 10.0, 50.0, 50.0));

        // Clip bounds are inclusive
        assert!(rect.begin_drag(Point::new(100.0, 100.0)).is_some());
    }

    #[test]
    fn cursor_follows_live_mode_while_dragging() {
        let mut rect = test_rect();
        assert_eq!(rect.cursor_style(Point::new(10.0, 30.0), false), "w-resize");
        assert_eq!(rect.cursor_style(Point::new(30.0, 30.0), false), "move");
        assert_eq!(rect.cursor_style(Point::new(80.0, 80.0), false), "crop");
        assert_eq!(rect.cursor_style(Point::new(50.0, 10.0), false), "ne-resize");

        let mut handler = rect.begin_drag(Point::new(10.0, 30.0)).unwrap();
        handler.update(&mut rect, Point::new(70.0, 30.0));
        // Pointer is now over nothing in particular, but the drag owns the cursor
        assert_eq!(rect.cursor_style(Point::new(95.0, 95.0), true), "e-resize");

        rect.end_drag();
        assert!(!rect.is_dragging());
    }

    #[test]
    fn grab_radius_scales_with_zoom() {
        // Zoomed in 2x: 5 screen px is 2.5 image px
        let vp = ViewPort::new(Size::new(100.0, 100.0), Size::new(200.0, 200.0), 2.0, Vec2::ZERO);
        let rect = DraggableRect::new(Rect::new(10.0, 10.0, 50.0, 50.0), vp, 5.0);
        assert_eq!(rect.classify_point(Point::new(13.0, 30.0)), DragMode::Whole);
        assert_eq!(rect.classify_point(Point::new(12.0, 30.0)), DragMode::Edge(Side::Left));

        // Screen-space cursor query converts the pointer first
        assert_eq!(rect.cursor_style(Point::new(24.0, 60.0), false), "w-resize");
    }

    #[test]
    fn drag_bias_keeps_grab_offset() {
        // Grab the right edge 3px inside and move; the edge keeps its offset
        let mut rect = test_rect();
        let mut handler = rect.begin_drag(Point::new(47.0, 30.0)).unwrap();
        assert_eq!(rect.drag_mode(), DragMode::Edge(Side::Right));
        handler.update(&mut rect, Point::new(57.0, 30.0));
        assert_eq!(rect.right(), 60.0);
        assert_eq!(rect.left(), 10.0);
    }

    #[test]
    fn clamp_tolerates_inverted_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Slack for sums like `x + width` landing a rounding step past the clip
        const EPS: f64 = 1e-6;

        prop_compose! {
            fn any_viewport()(
                image_w in 50.0..2000.0f64,
                image_h in 50.0..2000.0f64,
                screen_w in 100.0..2000.0f64,
                screen_h in 100.0..2000.0f64,
                zoom in 0.1..8.0f64,
                off_x in -300.0..300.0f64,
                off_y in -300.0..300.0f64,
            ) -> ViewPort {
                ViewPort::new(
                    Size::new(image_w, image_h),
                    Size::new(screen_w, screen_h),
                    zoom,
                    Vec2::new(off_x, off_y),
                )
            }
        }

        /// Point at fractions `(fx, fy)` of `rect`
        fn lerp(rect: Rect, fx: f64, fy: f64) -> Point {
            Point::new(rect.x0 + fx * rect.width(), rect.y0 + fy * rect.height())
        }

        fn within_clip(r: Rect, clip: Rect) -> bool {
            r.x0 >= clip.x0 - EPS && r.x1 <= clip.x1 + EPS && r.y0 >= clip.y0 - EPS && r.y1 <= clip.y1 + EPS
        }

        fn pointer_path() -> impl Strategy<Value = Vec<(f64, f64)>> {
            prop::collection::vec((-3000.0..3000.0f64, -3000.0..3000.0f64), 1..20)
        }

        proptest! {
            #[test]
            fn drag_keeps_edges_ordered_and_clipped(
                vp in any_viewport(),
                corners in (0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64),
                sensitivity in 0.0..20.0f64,
                start in (0.01..0.99f64, 0.01..0.99f64),
                path in pointer_path(),
            ) {
                let clip = vp.image_clipped();
                prop_assume!(clip.width() > 1.0 && clip.height() > 1.0);

                let (ax, ay, bx, by) = corners;
                let region = Rect::from_points(lerp(clip, ax, ay), lerp(clip, bx, by)).intersect(clip);
                let mut rect = DraggableRect::new(region, vp, sensitivity);

                let press = rect.viewport().image_to_screen(lerp(clip, start.0, start.1));
                let handler = rect.begin_drag(press);
                prop_assert!(handler.is_some());
                let mut handler = handler.unwrap();

                for (x, y) in path {
                    handler.update(&mut rect, Point::new(x, y));
                    prop_assert!(rect.bounds().is_normalized(), "{:?} after ({}, {})", rect.bounds(), x, y);
                    prop_assert!(within_clip(rect.rect(), clip), "{:?} outside {:?}", rect.rect(), clip);
                    prop_assert!(rect.is_dragging());
                }
            }

            #[test]
            fn whole_drag_keeps_size(
                vp in any_viewport(),
                x_span in (0.0..0.3f64, 0.7..1.0f64),
                y_span in (0.0..0.3f64, 0.7..1.0f64),
                grab in 0.0..0.2f64,
                path in pointer_path(),
            ) {
                let clip = vp.image_clipped();
                prop_assume!(clip.width() > 1.0 && clip.height() > 1.0);

                let region = Rect::from_points(lerp(clip, x_span.0, y_span.0), lerp(clip, x_span.1, y_span.1));
                let (width, height) = (region.width(), region.height());
                // Grab radius well inside the region, so its center moves it
                let sensitivity = grab * vp.zoom() * width.min(height);
                let mut rect = DraggableRect::new(region, vp, sensitivity);

                let press = rect.viewport().image_to_screen(region.center());
                let handler = rect.begin_drag(press);
                prop_assert_eq!(rect.drag_mode(), DragMode::Whole);
                let mut handler = handler.unwrap();

                for (x, y) in path {
                    handler.update(&mut rect, Point::new(x, y));
                    let r = rect.rect();
                    prop_assert!((r.width() - width).abs() < EPS, "width {} became {}", width, r.width());
                    prop_assert!((r.height() - height).abs() < EPS, "height {} became {}", height, r.height());
                    prop_assert!(within_clip(r, clip), "{:?} outside {:?}", r, clip);
                    prop_assert_eq!(rect.drag_mode(), DragMode::Whole);
                }
            }
        }
    }
}
