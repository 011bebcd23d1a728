// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions as the hovered target changes.
//!
//! Widgets form a flat list, so at most one target is hovered at a time and a
//! transition is at most one leave followed by at most one enter.
//!
//! ## Minimal example
//!
//! ```
//! use plinth::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1)).events().collect::<Vec<_>>(), vec![HoverEvent::Enter(1)]);
//! assert_eq!(
//!     h.update(Some(2)).events().collect::<Vec<_>>(),
//!     vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]
//! );
//! assert!(h.update(Some(2)).is_empty());
//! ```

/// A hover transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given target.
    Enter(K),
    /// Pointer leaves the given target.
    Leave(K),
}

/// The change produced by one [`HoverState::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition<K> {
    /// Target the pointer left, if any.
    pub leave: Option<K>,
    /// Target the pointer entered, if any.
    pub enter: Option<K>,
}

impl<K> Transition<K> {
    /// True if the hovered target did not change.
    pub fn is_empty(&self) -> bool {
        self.leave.is_none() && self.enter.is_none()
    }

    /// The transition as events: the leave (if any) always precedes the enter.
    pub fn events(self) -> impl Iterator<Item = HoverEvent<K>> {
        self.leave
            .map(HoverEvent::Leave)
            .into_iter()
            .chain(self.enter.map(HoverEvent::Enter))
    }
}

/// Tracks the single hovered target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered target, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Record the target now under the pointer and return what changed.
    ///
    /// The same target reported twice yields an empty transition.
    pub fn update(&mut self, target: Option<K>) -> Transition<K> {
        if self.current == target {
            return Transition {
                leave: None,
                enter: None,
            };
        }
        let leave = self.current;
        self.current = target;
        Transition {
            leave,
            enter: target,
        }
    }

    /// Clear the hovered target, returning it so the caller can send a leave.
    pub fn clear(&mut self) -> Option<K> {
        self.current.take()
    }

    /// Drop `target` without producing a transition. Returns true if it was hovered.
    pub fn forget(&mut self, target: K) -> bool {
        if self.current == Some(target) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
