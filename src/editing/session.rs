// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Crop editing session: the crop rectangle plus everything derived from it

use super::draggable::DraggableRect;
use super::overlay::{GrabZone, OverlayLayout};
use super::viewport::{ViewPort, ViewportMapping};
use crate::command::CropCommand;
use crate::settings::Settings;
use kurbo::Rect;

/// State of one crop-mode session
///
/// Created when the user enters crop mode and dropped when they leave it;
/// nothing here is persisted.
#[derive(Debug, Clone)]
pub struct CropSession {
    rect: DraggableRect<ViewPort>,
    settings: Settings,
    /// Set whenever a drag changed the region; cleared by `take_updated`
    updated: bool,
}

impl CropSession {
    pub fn new(viewport: ViewPort, settings: Settings) -> Self {
        let initial = default_crop(viewport.image_clipped(), settings.inset_divisor);
        tracing::debug!("Crop session started with default crop {:?}", initial);
        Self {
            rect: DraggableRect::new(initial, viewport, settings.grab_radius),
            settings,
            updated: false,
        }
    }

    pub fn rect(&self) -> &DraggableRect<ViewPort> {
        &self.rect
    }

    pub fn rect_mut(&mut self) -> &mut DraggableRect<ViewPort> {
        &mut self.rect
    }

    pub fn viewport(&self) -> &ViewPort {
        self.rect.viewport()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the viewport after a zoom or pan. The crop keeps its image
    /// coordinates.
    pub fn set_viewport(&mut self, viewport: ViewPort) {
        *self.rect.viewport_mut() = viewport;
    }

    /// Throw away the user's crop and start over from the default
    ///
    /// This ends the rectangle's drag mode but cannot reach a drag handler
    /// held by a tool; use `CropTool::reset` while a gesture may be live.
    pub fn reset(&mut self) {
        let initial = default_crop(self.viewport().image_clipped(), self.settings.inset_divisor);
        self.rect.end_drag();
        self.rect.set_rect(initial);
        self.updated = true;
        tracing::debug!("Crop reset to {:?}", initial);
    }

    pub fn mark_updated(&mut self) {
        self.updated = true;
    }

    /// Return whether the crop changed since the last call, and clear the flag
    pub fn take_updated(&mut self) -> bool {
        std::mem::take(&mut self.updated)
    }

    /// Crop rectangle in screen space
    pub fn screen_rect(&self) -> Rect {
        self.viewport().image_to_screen_rect(self.rect.rect())
    }

    pub fn overlay(&self) -> OverlayLayout {
        OverlayLayout::new(self.viewport().screen_clipped(), self.screen_rect())
    }

    pub fn grab_zone(&self) -> GrabZone {
        GrabZone::new(self.screen_rect(), self.settings.grab_radius)
    }

    pub fn command(&self) -> CropCommand {
        CropCommand::new(self.rect.rect(), self.screen_rect())
    }
}

/// The clip rect shrunk by `1/divisor` of its size on every side
///
/// Each inset is rounded to whole image units but never exceeds half the
/// clip, so the result is not inverted even for tiny clips.
pub fn default_crop(clip: Rect, divisor: f64) -> Rect {
    let dx = (clip.width() / divisor).round().min(clip.width() / 2.0);
    let dy = (clip.height() / divisor).round().min(clip.height() / 2.0);
    clip.inflate(-dx, -dy)
}
