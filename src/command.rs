// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! The crop command produced when leaving crop mode

use image::DynamicImage;
use kurbo::Rect;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CropError {
    #[error("crop region {0:?} does not cover any pixel of a {1}x{2} image")]
    EmptyRegion(Rect, u32, u32),
}

/// A finished crop: the region in image space, and where it was on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropCommand {
    pub image_rect: Rect,
    pub screen_rect: Rect,
}

impl CropCommand {
    pub fn new(image_rect: Rect, screen_rect: Rect) -> Self {
        Self {
            image_rect,
            screen_rect,
        }
    }

    /// The crop rounded to whole pixels and limited to the image
    ///
    /// Returns `(x, y, width, height)`.
    pub fn pixel_bounds(&self, width: u32, height: u32) -> Result<(u32, u32, u32, u32), CropError> {
        let r = self.image_rect.round();
        let x0 = r.x0.clamp(0.0, width as f64) as u32;
        let y0 = r.y0.clamp(0.0, height as f64) as u32;
        let x1 = r.x1.clamp(0.0, width as f64) as u32;
        let y1 = r.y1.clamp(0.0, height as f64) as u32;
        if x1 <= x0 || y1 <= y0 {
            return Err(CropError::EmptyRegion(self.image_rect, width, height));
        }
        Ok((x0, y0, x1 - x0, y1 - y0))
    }

    /// Crop `image` to this command's region
    pub fn apply(&self, image: &DynamicImage) -> Result<DynamicImage, CropError> {
        let (x, y, w, h) = self.pixel_bounds(image.width(), image.height())?;
        tracing::debug!("Cropping {}x{} image to {}x{} at ({}, {})", image.width(), image.height(), w, h, x, y);
        Ok(image.crop_imm(x, y, w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn apply_crops_to_rounded_region() {
        let cmd = CropCommand::new(Rect::new(10.4, 20.6, 30.2, 40.0), Rect::ZERO);
        let out = cmd.apply(&gradient(64, 64)).unwrap();
        assert_eq!(out.dimensions(), (20, 19));
        // Top-left pixel of the crop came from (10, 21)
        assert_eq!(out.get_pixel(0, 0), Rgba([10, 21, 0, 255]));
    }

    #[test]
    fn region_is_limited_to_image() {
        let cmd = CropCommand::new(Rect::new(-10.0, -10.0, 500.0, 20.0), Rect::ZERO);
        assert_eq!(cmd.pixel_bounds(64, 48), Ok((0, 0, 64, 20)));
    }

    #[test]
    fn empty_region_is_an_error() {
        let cmd = CropCommand::new(Rect::new(10.0, 10.0, 10.2, 40.0), Rect::ZERO);
        assert!(matches!(cmd.apply(&gradient(64, 64)), Err(CropError::EmptyRegion(..))));

        let outside = CropCommand::new(Rect::new(100.0, 0.0, 120.0, 10.0), Rect::ZERO);
        assert!(outside.pixel_bounds(64, 64).is_err());
    }
}
