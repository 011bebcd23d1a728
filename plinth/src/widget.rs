// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget capability set and the contexts handed to its callbacks.

use kurbo::{Point, Rect};
use plinth_region::{Key, Region};

use crate::event::KeyCode;

/// Handle of a widget registered with an [`App`](crate::App).
///
/// Handles follow insertion order and are never reused, see [`Key`].
pub type WidgetId = Key;

pub(crate) fn region_rect(region: Region<f64>) -> Rect {
    Rect::new(region.x, region.y, region.right(), region.bottom())
}

/// Read-only view of a widget's dispatcher-owned state while painting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaintCx {
    id: WidgetId,
    region: Region<f64>,
    focused: bool,
}

impl PaintCx {
    pub(crate) fn new(id: WidgetId, region: Region<f64>, focused: bool) -> Self {
        Self {
            id,
            region,
            focused,
        }
    }

    /// Handle of the widget being painted.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The widget's region.
    pub fn region(&self) -> Region<f64> {
        self.region
    }

    /// The widget's region as a Kurbo rectangle.
    pub fn rect(&self) -> Rect {
        region_rect(self.region)
    }

    /// Whether the widget holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Context passed to every input and focus callback.
///
/// This is the widget's only way back into the rendering pipeline:
/// [`request_repaint`](Self::request_repaint) schedules a scoped repaint that
/// the dispatcher performs once the current event has been fully routed.
#[derive(Debug)]
pub struct EventCx<'a> {
    id: WidgetId,
    region: Region<f64>,
    focused: bool,
    repaint: &'a mut Vec<WidgetId>,
}

impl<'a> EventCx<'a> {
    pub(crate) fn new(
        id: WidgetId,
        region: Region<f64>,
        focused: bool,
        repaint: &'a mut Vec<WidgetId>,
    ) -> Self {
        Self {
            id,
            region,
            focused,
            repaint,
        }
    }

    /// Handle of the receiving widget.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The receiving widget's region.
    pub fn region(&self) -> Region<f64> {
        self.region
    }

    /// The receiving widget's region as a Kurbo rectangle.
    pub fn rect(&self) -> Rect {
        region_rect(self.region)
    }

    /// Whether the receiving widget holds focus.
    ///
    /// Already `true` inside [`Widget::focus`] and any click that caused it,
    /// already `false` inside [`Widget::distract`].
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Ask for this widget, and only this widget, to be repainted.
    ///
    /// Repeated requests during one event collapse into a single repaint.
    pub fn request_repaint(&mut self) {
        if !self.repaint.contains(&self.id) {
            self.repaint.push(self.id);
        }
    }
}

/// A rectangular, stateful GUI component.
///
/// Every callback has a no-op default; implement only what the widget needs.
/// `S` is the drawable surface type of the [`Backend`](crate::Backend).
///
/// The dispatcher owns the widget's region and focused flag; the widget reads
/// them through [`PaintCx`] and [`EventCx`].
#[allow(unused_variables, reason = "Default callbacks ignore their arguments.")]
pub trait Widget<S: ?Sized> {
    /// Render the current state. Must be idempotent.
    fn paint(&mut self, cx: &PaintCx, surface: &mut S) {}

    /// Release owned resources. Called exactly once, at shutdown or removal.
    fn destroy(&mut self) {}

    /// Left press inside the region. Focus has already moved here.
    fn mouse_click(&mut self, cx: &mut EventCx<'_>, pos: Point) {}

    /// Right press inside the region. Focus has already moved here.
    fn mouse_right_click(&mut self, cx: &mut EventCx<'_>, pos: Point) {}

    /// Button release while focused, even if the pointer is outside the region.
    fn mouse_release(&mut self, cx: &mut EventCx<'_>, pos: Point) {}

    /// Pointer moved inside the region. Always after [`mouse_enter`](Self::mouse_enter).
    fn mouse_move(&mut self, cx: &mut EventCx<'_>, pos: Point) {}

    /// Pointer entered the region.
    fn mouse_enter(&mut self, cx: &mut EventCx<'_>, pos: Point) {}

    /// Pointer left the region.
    fn mouse_leave(&mut self, cx: &mut EventCx<'_>, pos: Point) {}

    /// Key pressed while focused.
    fn key_down(&mut self, cx: &mut EventCx<'_>, code: KeyCode) {}

    /// Key released while focused.
    fn key_up(&mut self, cx: &mut EventCx<'_>, code: KeyCode) {}

    /// Focus gained.
    fn focus(&mut self, cx: &mut EventCx<'_>) {}

    /// Focus lost. Requests a repaint unless overridden.
    fn distract(&mut self, cx: &mut EventCx<'_>) {
        cx.request_repaint();
    }
}
