// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Owns the `(focused, hovered)` state and turns one [`RawEvent`] into the
//! ordered list of widget callbacks it causes.
//! The router never touches widgets; [`App`](crate::App) executes the
//! returned [`Dispatch`] items in order.
//!
//! ## Rules
//!
//! - Presses are hit-tested. A hit moves focus to the target (`Distract` on
//!   the old holder, then `Focus` on the target) before the click itself.
//!   Misses are dropped.
//! - Releases and keys go to the focused target, whatever is under the pointer.
//! - Motion is hit-tested: `MouseLeave` on the old hover, `MouseEnter` on the
//!   new one, then `MouseMove` on the target.
//!
//! ## See Also
//!
//! [`hover`](crate::hover) for the transition rule used by motion routing.

use kurbo::Point;

use crate::event::{KeyCode, MouseButtons, RawEvent};
use crate::hover::HoverState;

/// A widget callback selected by the router.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Callback {
    /// Focus is being taken away.
    Distract,
    /// Focus is being given.
    Focus,
    /// Left press inside the widget.
    MouseClick(Point),
    /// Right press inside the widget.
    MouseRightClick(Point),
    /// Button release while the widget holds focus.
    MouseRelease(Point),
    /// Pointer entered the widget.
    MouseEnter(Point),
    /// Pointer left the widget.
    MouseLeave(Point),
    /// Pointer moved inside the widget.
    MouseMove(Point),
    /// Key pressed while the widget holds focus.
    KeyDown(KeyCode),
    /// Key released while the widget holds focus.
    KeyUp(KeyCode),
}

/// A single dispatch item: which widget receives which callback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dispatch<K> {
    /// Receiving widget.
    pub widget: K,
    /// Callback to invoke.
    pub callback: Callback,
}

impl<K> Dispatch<K> {
    const fn new(widget: K, callback: Callback) -> Self {
        Self { widget, callback }
    }
}

/// Focus and hover state machine for a flat set of targets.
///
/// ## Usage
///
/// - Call [`Router::route`] for each event with a picker that hit-tests a
///   point. The picker is invoked at most once, and only for pointer presses
///   and motion.
/// - Call [`Router::focus_child`] to move focus programmatically.
/// - Call [`Router::forget`] when a target disappears.
#[derive(Clone, Debug)]
pub struct Router<K: Copy + Eq> {
    focus: Option<K>,
    hover: HoverState<K>,
}

impl<K: Copy + Eq> Default for Router<K> {
    fn default() -> Self {
        Self {
            focus: None,
            hover: HoverState::new(),
        }
    }
}

impl<K: Copy + Eq> Router<K> {
    /// Create a router with nothing focused or hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused target, if any.
    pub fn focused(&self) -> Option<K> {
        self.focus
    }

    /// The hovered target, if any.
    pub fn hovered(&self) -> Option<K> {
        self.hover.current()
    }

    /// Move focus to `target`.
    ///
    /// The previous holder is distracted first. Re-focusing the current holder
    /// is not short-circuited: it receives `Distract` then `Focus`.
    pub fn focus_child(&mut self, target: K) -> Vec<Dispatch<K>> {
        let mut out = Vec::with_capacity(2);
        if let Some(old) = self.focus {
            out.push(Dispatch::new(old, Callback::Distract));
        }
        self.focus = Some(target);
        out.push(Dispatch::new(target, Callback::Focus));
        out
    }

    /// Drop every reference to `target` without emitting callbacks.
    pub fn forget(&mut self, target: K) {
        if self.focus == Some(target) {
            self.focus = None;
        }
        self.hover.forget(target);
    }

    /// Compute the callbacks for one event.
    ///
    /// `pick` resolves the target under a point. [`RawEvent::Quit`] is not
    /// routed (lifecycle belongs to the caller) and yields nothing.
    pub fn route(
        &mut self,
        event: &RawEvent,
        pick: impl FnOnce(Point) -> Option<K>,
    ) -> Vec<Dispatch<K>> {
        match *event {
            RawEvent::Quit => Vec::new(),
            RawEvent::ButtonPress { buttons, pos } => self.press(buttons, pos, pick),
            RawEvent::ButtonRelease { pos } => self.to_focused(Callback::MouseRelease(pos)),
            RawEvent::PointerMove { pos } => self.motion(pos, pick(pos)),
            RawEvent::KeyPress(code) => self.to_focused(Callback::KeyDown(code)),
            RawEvent::KeyRelease(code) => self.to_focused(Callback::KeyUp(code)),
        }
    }

    fn press(
        &mut self,
        buttons: MouseButtons,
        pos: Point,
        pick: impl FnOnce(Point) -> Option<K>,
    ) -> Vec<Dispatch<K>> {
        // Left wins when several buttons are held.
        let callback = if buttons.contains(MouseButtons::LEFT) {
            Callback::MouseClick(pos)
        } else if buttons.contains(MouseButtons::RIGHT) {
            Callback::MouseRightClick(pos)
        } else {
            return Vec::new();
        };
        let Some(target) = pick(pos) else {
            return Vec::new();
        };
        let mut out = self.focus_child(target);
        out.push(Dispatch::new(target, callback));
        out
    }

    fn motion(&mut self, pos: Point, target: Option<K>) -> Vec<Dispatch<K>> {
        let transition = self.hover.update(target);
        let mut out = Vec::with_capacity(3);
        if let Some(old) = transition.leave {
            out.push(Dispatch::new(old, Callback::MouseLeave(pos)));
        }
        if let Some(new) = transition.enter {
            out.push(Dispatch::new(new, Callback::MouseEnter(pos)));
        }
        if let Some(t) = target {
            out.push(Dispatch::new(t, Callback::MouseMove(pos)));
        }
        out
    }

    fn to_focused(&self, callback: Callback) -> Vec<Dispatch<K>> {
        self.focus
            .map(|f| Dispatch::new(f, callback))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two side-by-side targets: 1 at (0,0,10,10), 2 at (20,0,10,10).
    fn pick(p: Point) -> Option<u32> {
        let inside = |x0: f64| p.x >= x0 && p.x <= x0 + 10.0 && p.y >= 0.0 && p.y <= 10.0;
        if inside(0.0) {
            Some(1)
        } else if inside(20.0) {
            Some(2)
        } else {
            None
        }
    }

    fn pairs(seq: &[Dispatch<u32>]) -> Vec<(u32, Callback)> {
        seq.iter().map(|d| (d.widget, d.callback)).collect()
    }

    #[test]
    fn press_focuses_before_click() {
        let mut r: Router<u32> = Router::new();
        let ev = RawEvent::left_press(5.0, 5.0);
        let out = r.route(&ev, pick);
        let p = Point::new(5.0, 5.0);
        assert_eq!(
            pairs(&out),
            vec![(1, Callback::Focus), (1, Callback::MouseClick(p))]
        );
        assert_eq!(r.focused(), Some(1));
    }

    #[test]
    fn press_on_nothing_is_dropped() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::left_press(5.0, 5.0), pick);
        let out = r.route(&RawEvent::left_press(15.0, 5.0), pick);
        assert!(out.is_empty());
        assert_eq!(r.focused(), Some(1));
    }

    #[test]
    fn switching_focus_distracts_old_first() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::left_press(5.0, 5.0), pick);
        let out = r.route(&RawEvent::right_press(25.0, 5.0), pick);
        assert_eq!(
            pairs(&out),
            vec![
                (1, Callback::Distract),
                (2, Callback::Focus),
                (2, Callback::MouseRightClick(Point::new(25.0, 5.0))),
            ]
        );
        assert_eq!(r.focused(), Some(2));
    }

    #[test]
    fn reclick_refocuses_same_target() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::left_press(5.0, 5.0), pick);
        let out = r.route(&RawEvent::left_press(6.0, 6.0), pick);
        assert_eq!(
            pairs(&out),
            vec![
                (1, Callback::Distract),
                (1, Callback::Focus),
                (1, Callback::MouseClick(Point::new(6.0, 6.0))),
            ]
        );
    }

    #[test]
    fn left_wins_over_right_and_middle_is_ignored() {
        let mut r: Router<u32> = Router::new();
        let both = RawEvent::ButtonPress {
            buttons: MouseButtons::LEFT | MouseButtons::RIGHT,
            pos: Point::new(1.0, 1.0),
        };
        let out = r.route(&both, pick);
        assert_eq!(
            out.last().map(|d| d.callback),
            Some(Callback::MouseClick(Point::new(1.0, 1.0)))
        );

        let middle = RawEvent::ButtonPress {
            buttons: MouseButtons::MIDDLE,
            pos: Point::new(25.0, 1.0),
        };
        let out = r.route(&middle, |_| panic!("middle presses are not hit-tested"));
        assert!(out.is_empty());
        assert_eq!(r.focused(), Some(1));
    }

    #[test]
    fn release_goes_to_focused_not_to_pointer() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::left_press(5.0, 5.0), pick);
        let out = r.route(&RawEvent::release(25.0, 5.0), |_| panic!("releases are not hit-tested"));
        assert_eq!(
            pairs(&out),
            vec![(1, Callback::MouseRelease(Point::new(25.0, 5.0)))]
        );
    }

    #[test]
    fn release_and_keys_without_focus_are_dropped() {
        let mut r: Router<u32> = Router::new();
        assert!(r.route(&RawEvent::release(5.0, 5.0), pick).is_empty());
        assert!(r.route(&RawEvent::KeyPress(KeyCode::SPACE), pick).is_empty());
        assert!(r.route(&RawEvent::KeyRelease(KeyCode::SPACE), pick).is_empty());
    }

    #[test]
    fn keys_go_to_focused() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::left_press(25.0, 5.0), pick);
        let down = r.route(&RawEvent::KeyPress(KeyCode(97)), pick);
        let up = r.route(&RawEvent::KeyRelease(KeyCode(97)), pick);
        assert_eq!(pairs(&down), vec![(2, Callback::KeyDown(KeyCode(97)))]);
        assert_eq!(pairs(&up), vec![(2, Callback::KeyUp(KeyCode(97)))]);
    }

    #[test]
    fn entering_precedes_moving() {
        let mut r: Router<u32> = Router::new();
        assert!(r.route(&RawEvent::move_to(15.0, 5.0), pick).is_empty());
        let p = Point::new(5.0, 5.0);
        let out = r.route(&RawEvent::move_to(5.0, 5.0), pick);
        assert_eq!(
            pairs(&out),
            vec![(1, Callback::MouseEnter(p)), (1, Callback::MouseMove(p))]
        );
        let q = Point::new(6.0, 5.0);
        let out = r.route(&RawEvent::move_to(6.0, 5.0), pick);
        assert_eq!(pairs(&out), vec![(1, Callback::MouseMove(q))]);
        assert_eq!(r.hovered(), Some(1));
    }

    #[test]
    fn direct_switch_leaves_enters_then_moves() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::move_to(5.0, 5.0), pick);
        let p = Point::new(25.0, 5.0);
        let out = r.route(&RawEvent::move_to(25.0, 5.0), pick);
        assert_eq!(
            pairs(&out),
            vec![
                (1, Callback::MouseLeave(p)),
                (2, Callback::MouseEnter(p)),
                (2, Callback::MouseMove(p)),
            ]
        );
    }

    #[test]
    fn leaving_to_empty_space_only_leaves() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::move_to(5.0, 5.0), pick);
        let p = Point::new(50.0, 50.0);
        let out = r.route(&RawEvent::move_to(50.0, 50.0), pick);
        assert_eq!(pairs(&out), vec![(1, Callback::MouseLeave(p))]);
        assert_eq!(r.hovered(), None);
    }

    #[test]
    fn forget_clears_focus_and_hover() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::left_press(5.0, 5.0), pick);
        let _ = r.route(&RawEvent::move_to(5.0, 5.0), pick);
        r.forget(2);
        assert_eq!(r.focused(), Some(1));
        r.forget(1);
        assert_eq!(r.focused(), None);
        assert_eq!(r.hovered(), None);
        // Nothing to leave after forgetting.
        assert!(r.route(&RawEvent::move_to(50.0, 50.0), pick).is_empty());
    }

    #[test]
    fn quit_is_not_routed() {
        let mut r: Router<u32> = Router::new();
        let _ = r.route(&RawEvent::left_press(5.0, 5.0), pick);
        assert!(r.route(&RawEvent::Quit, |_| panic!("quit is not hit-tested")).is_empty());
    }
}
