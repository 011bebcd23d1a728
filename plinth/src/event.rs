// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as delivered by a display backend.

use bitflags::bitflags;
use kurbo::Point;

bitflags! {
    /// Mouse buttons held down when a press is reported.
    ///
    /// A press may report several held buttons at once. Routing gives
    /// [`LEFT`](Self::LEFT) precedence over [`RIGHT`](Self::RIGHT); presses
    /// holding neither are dropped.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        /// Primary button.
        const LEFT   = 0b0000_0001;
        /// Middle button or wheel click.
        const MIDDLE = 0b0000_0010;
        /// Secondary button.
        const RIGHT  = 0b0000_0100;
    }
}

/// Platform key code, passed through to widgets untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// The space bar.
    pub const SPACE: Self = Self(32);
}

/// One raw event from the platform event source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawEvent {
    /// The user asked to close the window; the application shuts down.
    Quit,
    /// A mouse button went down.
    ButtonPress {
        /// Buttons held at press time.
        buttons: MouseButtons,
        /// Pointer position.
        pos: Point,
    },
    /// A mouse button went up.
    ButtonRelease {
        /// Pointer position.
        pos: Point,
    },
    /// The pointer moved.
    PointerMove {
        /// New pointer position.
        pos: Point,
    },
    /// A key went down.
    KeyPress(KeyCode),
    /// A key went up.
    KeyRelease(KeyCode),
}

impl RawEvent {
    /// Left-button press at `(x, y)`.
    pub fn left_press(x: f64, y: f64) -> Self {
        Self::ButtonPress {
            buttons: MouseButtons::LEFT,
            pos: Point::new(x, y),
        }
    }

    /// Right-button press at `(x, y)`.
    pub fn right_press(x: f64, y: f64) -> Self {
        Self::ButtonPress {
            buttons: MouseButtons::RIGHT,
            pos: Point::new(x, y),
        }
    }

    /// Button release at `(x, y)`.
    pub fn release(x: f64, y: f64) -> Self {
        Self::ButtonRelease {
            pos: Point::new(x, y),
        }
    }

    /// Pointer motion to `(x, y)`.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::PointerMove {
            pos: Point::new(x, y),
        }
    }

    /// The pointer position carried by the event, if any.
    pub fn pos(&self) -> Option<Point> {
        match *self {
            Self::ButtonPress { pos, .. }
            | Self::ButtonRelease { pos }
            | Self::PointerMove { pos } => Some(pos),
            Self::Quit | Self::KeyPress(_) | Self::KeyRelease(_) => None,
        }
    }
}
