// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Mouse gesture state machine
//!
//! Raw down / move / up events go in; clicks and drags come out on a
//! [`MouseDelegate`]. Only the left button drives gestures; other buttons
//! are reported through `other_down` / `other_up` and otherwise ignored.

use crate::settings;
use kurbo::Point;

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard modifiers held during a mouse event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

/// A mouse event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
    pub button: Option<MouseButton>,
    pub mods: Modifiers,
}

impl MouseEvent {
    pub fn new(pos: Point, button: Option<MouseButton>) -> Self {
        Self {
            pos,
            button,
            mods: Modifiers::default(),
        }
    }

    pub fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }
}

/// Positions of an ongoing drag (screen space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub start: Point,
    pub prev: Point,
    pub current: Point,
}

/// Receiver of gesture callbacks. All methods default to no-ops.
#[allow(unused_variables)]
pub trait MouseDelegate {
    type Data;

    fn left_down(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn left_up(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn left_click(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn mouse_moved(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn left_drag_began(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}
    fn left_drag_changed(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}
    fn left_drag_ended(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}
    fn other_down(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn other_up(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn cancel(&mut self, data: &mut Self::Data) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MouseState {
    /// No button held
    Up,
    /// Left button held, not yet moved past the threshold
    Down(MouseEvent),
    /// Left button held and dragging
    Drag(Drag),
}

/// Turns raw events into gestures
#[derive(Debug, Clone)]
pub struct Mouse {
    state: MouseState,
    threshold: f64,
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new(settings::mouse::DRAG_THRESHOLD)
    }
}

impl Mouse {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: MouseState::Up,
            threshold,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, MouseState::Drag(_))
    }

    pub fn is_down(&self) -> bool {
        !matches!(self.state, MouseState::Up)
    }

    pub fn mouse_down<D: MouseDelegate>(&mut self, event: MouseEvent, delegate: &mut D, data: &mut D::Data) {
        if event.button != Some(MouseButton::Left) {
            delegate.other_down(event, data);
            return;
        }
        if self.is_down() {
            tracing::warn!("Left down while already down; ignoring");
            return;
        }
        self.state = MouseState::Down(event);
        delegate.left_down(event, data);
    }

    pub fn mouse_moved<D: MouseDelegate>(&mut self, event: MouseEvent, delegate: &mut D, data: &mut D::Data) {
        match self.state {
            MouseState::Up => delegate.mouse_moved(event, data),
            MouseState::Down(down) => {
                if (event.pos - down.pos).hypot() > self.threshold {
                    let drag = Drag {
                        start: down.pos,
                        prev: down.pos,
                        current: event.pos,
                    };
                    self.state = MouseState::Drag(drag);
                    delegate.left_drag_began(event, drag, data);
                } else {
                    delegate.mouse_moved(event, data);
                }
            }
            MouseState::Drag(prev) => {
                let drag = Drag {
                    start: prev.start,
                    prev: prev.current,
                    current: event.pos,
                };
                self.state = MouseState::Drag(drag);
                delegate.left_drag_changed(event, drag, data);
            }
        }
    }

    pub fn mouse_up<D: MouseDelegate>(&mut self, event: MouseEvent, delegate: &mut D, data: &mut D::Data) {
        if event.button != Some(MouseButton::Left) {
            delegate.other_up(event, data);
            return;
        }
        match std::mem::replace(&mut self.state, MouseState::Up) {
            MouseState::Up => {
                tracing::warn!("Left up without a matching down; ignoring");
                return;
            }
            MouseState::Down(_) => delegate.left_click(event, data),
            MouseState::Drag(prev) => {
                let drag = Drag {
                    start: prev.start,
                    prev: prev.current,
                    current: event.pos,
                };
                delegate.left_drag_ended(event, drag, data);
            }
        }
        delegate.left_up(event, data);
    }

    /// Abort any gesture in progress
    pub fn cancel<D: MouseDelegate>(&mut self, delegate: &mut D, data: &mut D::Data) {
        if self.is_down() {
            self.state = MouseState::Up;
            delegate.cancel(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder;

    impl MouseDelegate for Recorder {
        type Data = Vec<String>;

        fn left_down(&mut self, _event: MouseEvent, log: &mut Vec<String>) {
            log.push("down".into());
        }
        fn left_up(&mut self, _event: MouseEvent, log: &mut Vec<String>) {
            log.push("up".into());
        }
        fn left_click(&mut self, _event: MouseEvent, log: &mut Vec<String>) {
            log.push("click".into());
        }
        fn mouse_moved(&mut self, _event: MouseEvent, log: &mut Vec<String>) {
            log.push("moved".into());
        }
        fn left_drag_began(&mut self, _event: MouseEvent, drag: Drag, log: &mut Vec<String>) {
            log.push(format!("began {} {}", drag.start.x, drag.current.x));
        }
        fn left_drag_changed(&mut self, _event: MouseEvent, drag: Drag, log: &mut Vec<String>) {
            log.push(format!("changed {} {}", drag.prev.x, drag.current.x));
        }
        fn left_drag_ended(&mut self, _event: MouseEvent, drag: Drag, log: &mut Vec<String>) {
            log.push(format!("ended {}", drag.current.x));
        }
        fn cancel(&mut self, log: &mut Vec<String>) {
            log.push("cancel".into());
        }
    }

    fn left(x: f64) -> MouseEvent {
        MouseEvent::new(Point::new(x, 0.0), Some(MouseButton::Left))
    }

    fn hover(x: f64) -> MouseEvent {
        MouseEvent::new(Point::new(x, 0.0), None)
    }

    #[test]
    fn click_without_movement() {
        let mut mouse = Mouse::new(2.0);
        let mut log = Vec::new();
        mouse.mouse_down(left(10.0), &mut Recorder, &mut log);
        mouse.mouse_moved(hover(11.0), &mut Recorder, &mut log);
        mouse.mouse_up(left(11.0), &mut Recorder, &mut log);
        assert_eq!(log, ["down", "moved", "click", "up"]);
        assert!(!mouse.is_down());
    }

    #[test]
    fn drag_sequence() {
        let mut mouse = Mouse::new(2.0);
        let mut log = Vec::new();
        mouse.mouse_down(left(10.0), &mut Recorder, &mut log);
        mouse.mouse_moved(hover(15.0), &mut Recorder, &mut log);
        assert!(mouse.is_dragging());
        mouse.mouse_moved(hover(20.0), &mut Recorder, &mut log);
        mouse.mouse_up(left(25.0), &mut Recorder, &mut log);
        assert_eq!(log, ["down", "began 10 15", "changed 15 20", "ended 25", "up"]);
        assert!(!mouse.is_dragging());
    }

    #[test]
    fn other_buttons_do_not_start_gestures() {
        let mut mouse = Mouse::default();
        let mut log = Vec::new();
        let right = MouseEvent::new(Point::new(10.0, 0.0), Some(MouseButton::Right));
        mouse.mouse_down(right, &mut Recorder, &mut log);
        mouse.mouse_moved(hover(50.0), &mut Recorder, &mut log);
        mouse.mouse_up(right, &mut Recorder, &mut log);
        assert_eq!(log, ["moved"]);
    }

    #[test]
    fn cancel_only_when_down() {
        let mut mouse = Mouse::default();
        let mut log = Vec::new();
        mouse.cancel(&mut Recorder, &mut log);
        assert!(log.is_empty());

        mouse.mouse_down(left(0.0), &mut Recorder, &mut log);
        mouse.mouse_moved(hover(30.0), &mut Recorder, &mut log);
        mouse.cancel(&mut Recorder, &mut log);
        assert_eq!(log, ["down", "began 0 30", "cancel"]);
        assert!(!mouse.is_down());

        // A stray up after cancel is ignored
        mouse.mouse_up(left(30.0), &mut Recorder, &mut log);
        assert_eq!(log.len(), 3);
    }
}
