// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for image editing modes

use crate::editing::mouse::MouseDelegate;
use crate::editing::session::CropSession;

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Crop the image to a draggable rectangle
    Crop,
}

// ===== Tool Trait =====

/// An editing mode driven by mouse gestures
pub trait Tool: MouseDelegate<Data = CropSession> {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// CSS-style cursor name for the last pointer position
    fn cursor(&self) -> &str {
        "default"
    }
}

// ===== Tool Modules =====

pub mod crop;

pub use crop::CropTool;
