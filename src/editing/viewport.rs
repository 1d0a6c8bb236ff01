// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Mapping between screen space and image space

use crate::settings;
use kurbo::{Point, Rect, Size, Vec2};

/// Coordinate conversion the crop editor needs from its host
///
/// Image space is the pixel grid of the underlying image; screen space is
/// where pointer events arrive. Both have y growing downward.
pub trait ViewportMapping {
    fn screen_to_image_x(&self, x: f64) -> f64;
    fn screen_to_image_y(&self, y: f64) -> f64;

    /// Convert a screen-space length (e.g. a grab radius) to image space
    fn screen_to_image_size(&self, size: f64) -> f64;

    /// The part of the image a region may occupy, in image space
    fn image_clipped(&self) -> Rect;

    fn image_to_screen_x(&self, x: f64) -> f64;
    fn image_to_screen_y(&self, y: f64) -> f64;

    fn screen_to_image(&self, pt: Point) -> Point {
        Point::new(self.screen_to_image_x(pt.x), self.screen_to_image_y(pt.y))
    }

    fn image_to_screen(&self, pt: Point) -> Point {
        Point::new(self.image_to_screen_x(pt.x), self.image_to_screen_y(pt.y))
    }

    fn image_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.image_to_screen(Point::new(rect.x0, rect.y0)),
            self.image_to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// The clip rectangle in screen space
    fn screen_clipped(&self) -> Rect {
        self.image_to_screen_rect(self.image_clipped())
    }
}

/// Zoom + pan of an image inside a screen area
///
/// `screen = image * zoom + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    zoom: f64,
    offset: Vec2,
    image_size: Size,
    screen_size: Size,
}

impl ViewPort {
    pub fn new(image_size: Size, screen_size: Size, zoom: f64, offset: Vec2) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            offset,
            image_size,
            screen_size,
        }
    }

    /// Fit the whole image into the screen, centered
    ///
    /// The zoom never exceeds `max_zoom`, so small images stay at their
    /// natural size instead of being enlarged.
    pub fn fit(image_size: Size, screen_size: Size, max_zoom: f64) -> Self {
        let zoom = if image_size.width > 0.0 && image_size.height > 0.0 {
            (screen_size.width / image_size.width)
                .min(screen_size.height / image_size.height)
                .min(max_zoom)
        } else {
            1.0
        };
        let zoom = clamp_zoom(zoom);
        let offset = Vec2::new(
            (screen_size.width - image_size.width * zoom) / 2.0,
            (screen_size.height - image_size.height * zoom) / 2.0,
        );
        tracing::debug!(
            "Viewport fit: image={:?} screen={:?} zoom={} offset={:?}",
            image_size,
            screen_size,
            zoom,
            offset
        );
        Self {
            zoom,
            offset,
            image_size,
            screen_size,
        }
    }

    /// Fit using the default zoom cap
    pub fn fit_default(image_size: Size, screen_size: Size) -> Self {
        Self::fit(image_size, screen_size, settings::viewport::MAX_FIT_ZOOM)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Zoom around a fixed screen point, keeping the image point under it
    pub fn zoom_about(&mut self, zoom: f64, screen_pt: Point) {
        let anchor = self.screen_to_image(screen_pt);
        self.zoom = clamp_zoom(zoom);
        self.offset = screen_pt.to_vec2() - anchor.to_vec2() * self.zoom;
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Full image bounds in image space
    pub fn image_bounds(&self) -> Rect {
        self.image_size.to_rect()
    }
}

impl ViewportMapping for ViewPort {
    fn screen_to_image_x(&self, x: f64) -> f64 {
        (x - self.offset.x) / self.zoom
    }

    fn screen_to_image_y(&self, y: f64) -> f64 {
        (y - self.offset.y) / self.zoom
    }

    fn screen_to_image_size(&self, size: f64) -> f64 {
        size / self.zoom
    }

    fn image_to_screen_x(&self, x: f64) -> f64 {
        x * self.zoom + self.offset.x
    }

    fn image_to_screen_y(&self, y: f64) -> f64 {
        y * self.zoom + self.offset.y
    }

    /// Image bounds intersected with what is visible on screen
    fn image_clipped(&self) -> Rect {
        let visible = Rect::new(
            self.screen_to_image_x(0.0),
            self.screen_to_image_y(0.0),
            self.screen_to_image_x(self.screen_size.width),
            self.screen_to_image_y(self.screen_size.height),
        );
        let bounds = self.image_bounds();
        let clipped = bounds.intersect(visible);
        // Nothing visible: collapse to the nearest image point
        if clipped.width() <= 0.0 || clipped.height() <= 0.0 {
            let pt = Point::new(
                clipped.x0.max(bounds.x0).min(bounds.x1),
                clipped.y0.max(bounds.y0).min(bounds.y1),
            );
            Rect::from_origin_size(pt, Size::ZERO)
        } else {
            clipped
        }
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(settings::viewport::MIN_ZOOM, settings::viewport::MAX_ZOOM)
}
