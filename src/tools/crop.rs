// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Crop tool
//!
//! Routes mouse gestures into the session's draggable rectangle. A press
//! asks the rectangle for a drag handler; every following move (before or
//! after the drag threshold) is fed to it until the button is released.

use crate::editing::draggable::DragHandler;
use crate::editing::mouse::{Drag, MouseDelegate, MouseEvent};
use crate::editing::session::CropSession;
use crate::tools::{Tool, ToolId};
use kurbo::Point;

/// The crop tool
#[derive(Debug, Clone, Default)]
pub struct CropTool {
    /// Live drag, if the press landed on the editable area
    handler: Option<DragHandler>,
    /// Cursor name for the last pointer position
    cursor: String,
}

impl Tool for CropTool {
    fn id(&self) -> ToolId {
        ToolId::Crop
    }

    fn cursor(&self) -> &str {
        if self.cursor.is_empty() {
            "default"
        } else {
            &self.cursor
        }
    }
}

impl CropTool {
    pub fn is_dragging(&self) -> bool {
        self.handler.is_some()
    }

    fn drag_to(&mut self, pos: Point, session: &mut CropSession) {
        if let Some(handler) = self.handler.as_mut() {
            handler.update(session.rect_mut(), pos);
            session.mark_updated();
        }
        self.update_cursor(pos, session);
    }

    fn update_cursor(&mut self, pos: Point, session: &CropSession) {
        self.cursor = session.rect().cursor_style(pos, self.handler.is_some());
    }

    /// Drop any live drag and restore the session's default crop
    ///
    /// Prefer this over [`CropSession::reset`] while the tool is in use, so
    /// later moves of the same gesture no longer touch the region.
    pub fn reset(&mut self, session: &mut CropSession) {
        self.handler = None;
        session.reset();
        tracing::debug!("Crop tool: reset");
    }

    fn finish(&mut self, session: &mut CropSession) {
        if self.handler.take().is_some() {
            session.rect_mut().end_drag();
            tracing::debug!("Crop drag finished: {:?}", session.rect().rect());
        }
    }
}

impl MouseDelegate for CropTool {
    type Data = CropSession;

    fn left_down(&mut self, event: MouseEvent, data: &mut CropSession) {
        self.handler = data.rect_mut().begin_drag(event.pos);
        self.update_cursor(event.pos, data);
    }

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut CropSession) {
        self.drag_to(event.pos, data);
    }

    fn left_drag_began(&mut self, _event: MouseEvent, drag: Drag, data: &mut CropSession) {
        self.drag_to(drag.current, data);
    }

    fn left_drag_changed(&mut self, _event: MouseEvent, drag: Drag, data: &mut CropSession) {
        self.drag_to(drag.current, data);
    }

    fn left_drag_ended(&mut self, _event: MouseEvent, drag: Drag, data: &mut CropSession) {
        self.drag_to(drag.current, data);
    }

    fn left_up(&mut self, event: MouseEvent, data: &mut CropSession) {
        self.finish(data);
        self.update_cursor(event.pos, data);
    }

    fn cancel(&mut self, data: &mut CropSession) {
        self.finish(data);
        tracing::debug!("Crop tool: cancelled");
    }
}
