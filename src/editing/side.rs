// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Rectangle sides and their lookup tables (opposite side, cursor letter)

/// A vertical edge of the region (moves along the x axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XSide {
    Left,
    Right,
}

/// A horizontal edge of the region (moves along the y axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YSide {
    Top,
    Bottom,
}

/// Any of the four edges of the region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl XSide {
    pub fn opposite(self) -> Self {
        match self {
            XSide::Left => XSide::Right,
            XSide::Right => XSide::Left,
        }
    }

    /// Compass letter used to build CSS-style resize cursor names
    pub fn cursor_letter(self) -> &'static str {
        match self {
            XSide::Left => "w",
            XSide::Right => "e",
        }
    }
}

impl YSide {
    pub fn opposite(self) -> Self {
        match self {
            YSide::Top => YSide::Bottom,
            YSide::Bottom => YSide::Top,
        }
    }

    /// Compass letter used to build CSS-style resize cursor names
    pub fn cursor_letter(self) -> &'static str {
        match self {
            YSide::Top => "n",
            YSide::Bottom => "s",
        }
    }
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    pub fn cursor_letter(self) -> &'static str {
        match self {
            Side::Left => "w",
            Side::Right => "e",
            Side::Top => "n",
            Side::Bottom => "s",
        }
    }

    /// The x-axis side, if this is a vertical edge
    pub fn as_x(self) -> Option<XSide> {
        match self {
            Side::Left => Some(XSide::Left),
            Side::Right => Some(XSide::Right),
            Side::Top | Side::Bottom => None,
        }
    }

    /// The y-axis side, if this is a horizontal edge
    pub fn as_y(self) -> Option<YSide> {
        match self {
            Side::Top => Some(YSide::Top),
            Side::Bottom => Some(YSide::Bottom),
            Side::Left | Side::Right => None,
        }
    }
}

impl From<XSide> for Side {
    fn from(side: XSide) -> Self {
        match side {
            XSide::Left => Side::Left,
            XSide::Right => Side::Right,
        }
    }
}

impl From<YSide> for Side {
    fn from(side: YSide) -> Self {
        match side {
            YSide::Top => Side::Top,
            YSide::Bottom => Side::Bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for side in [Side::Left, Side::Right, Side::Top, Side::Bottom] {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
        assert_eq!(XSide::Left.opposite(), XSide::Right);
        assert_eq!(YSide::Bottom.opposite(), YSide::Top);
    }

    #[test]
    fn axis_conversions() {
        assert_eq!(Side::from(XSide::Right).as_x(), Some(XSide::Right));
        assert_eq!(Side::from(YSide::Top).as_y(), Some(YSide::Top));
        assert_eq!(Side::Left.as_y(), None);
        assert_eq!(Side::Bottom.as_x(), None);
    }

    #[test]
    fn cursor_letters_match_compass() {
        assert_eq!(Side::from(XSide::Left).cursor_letter(), XSide::Left.cursor_letter());
        assert_eq!(Side::Top.cursor_letter(), "n");
        assert_eq!(YSide::Bottom.cursor_letter(), "s");
        assert_eq!(XSide::Right.cursor_letter(), "e");
    }
}
