// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod bounds;
pub mod drag_mode;
pub mod draggable;
pub mod mouse;
pub mod overlay;
pub mod session;
pub mod side;
pub mod viewport;

pub use bounds::Bounds;
pub use drag_mode::DragMode;
pub use draggable::{DragHandler, DraggableRect};
pub use mouse::{Drag, Modifiers, Mouse, MouseButton, MouseDelegate, MouseEvent};
pub use overlay::{GrabZone, OverlayLayout};
pub use session::CropSession;
pub use side::{Side, XSide, YSide};
pub use viewport::{ViewPort, ViewportMapping};
