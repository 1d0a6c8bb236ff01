// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Recorded pointer scripts for driving a crop session without a UI
//!
//! A script is a JSON array of steps in screen coordinates:
//!
//! ```json
//! [{ "down": [300, 250] }, { "move": [300, 280] }, { "up": [300, 280] }, "reset"]
//! ```

use crate::editing::mouse::{Mouse, MouseButton, MouseEvent};
use crate::editing::session::CropSession;
use crate::tools::{CropTool, Tool};
use kurbo::Point;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One pointer event
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Left button pressed
    Down([f64; 2]),
    /// Pointer moved (button state is whatever the last down/up left)
    Move([f64; 2]),
    /// Left button released
    Up([f64; 2]),
    /// Abort the gesture in progress
    Cancel,
    /// Restore the default crop
    Reset,
}

/// Parse a script from JSON text
pub fn parse(text: &str) -> Result<Vec<Step>, ScriptError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load(path: &Path) -> Result<Vec<Step>, ScriptError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}

/// Feed `steps` through the mouse state machine into the crop tool
///
/// Returns the tool's cursor after each step.
pub fn replay(
    steps: &[Step],
    mouse: &mut Mouse,
    tool: &mut CropTool,
    session: &mut CropSession,
) -> Vec<String> {
    let mut cursors = Vec::with_capacity(steps.len());
    for step in steps {
        match *step {
            Step::Down([x, y]) => {
                mouse.mouse_down(left(x, y), tool, session);
            }
            Step::Move([x, y]) => {
                mouse.mouse_moved(MouseEvent::new(Point::new(x, y), None), tool, session);
            }
            Step::Up([x, y]) => {
                mouse.mouse_up(left(x, y), tool, session);
            }
            Step::Cancel => mouse.cancel(tool, session),
            Step::Reset => {
                mouse.cancel(tool, session);
                tool.reset(session);
            }
        }
        tracing::debug!("{:?} -> cursor {}, crop {:?}", step, tool.cursor(), session.rect().rect());
        cursors.push(tool.cursor().to_string());
    }
    cursors
}

fn left(x: f64, y: f64) -> MouseEvent {
    MouseEvent::new(Point::new(x, y), Some(MouseButton::Left))
}
