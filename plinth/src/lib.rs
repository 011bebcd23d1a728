// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plinth: a minimal retained-mode widget toolkit.
//!
//! ## Overview
//!
//! A window owns a flat list of rectangular widgets. Raw input events from a
//! display [`Backend`] are translated into widget callbacks (click, hover,
//! focus, key) using point-in-rectangle hit testing.
//!
//! ## Layering
//!
//! - [`Router`](router::Router) holds the `(focused, hovered)` state and turns
//!   each [`RawEvent`] into an ordered list of [`Dispatch`](router::Dispatch)
//!   items. It never touches widgets.
//! - [`App`] owns the widgets and the backend, hit-tests through
//!   [`plinth_region::RegionList`], executes the router's dispatch list, and
//!   performs the scoped repaints widgets ask for.
//!
//! ## Routing rules
//!
//! - Press: the first widget in insertion order under the pointer gets focus
//!   (the old holder is distracted first), then the click. Misses are dropped.
//! - Release: the focused widget, wherever the pointer is.
//! - Motion: leave the old hovered widget, enter the new one, then move.
//! - Keys: the focused widget only.
//! - Quit: every widget is destroyed in insertion order and the loop stops.
//!
//! ## Example
//!
//! ```
//! use plinth::headless::{Canvas, HeadlessBackend};
//! use plinth::{App, AppConfig, EventCx, Point, RawEvent, Region, Widget};
//!
//! #[derive(Default)]
//! struct Counter {
//!     clicks: u32,
//! }
//!
//! impl Widget<Canvas> for Counter {
//!     fn mouse_click(&mut self, cx: &mut EventCx<'_>, _pos: Point) {
//!         assert!(cx.is_focused());
//!         self.clicks += 1;
//!         cx.request_repaint();
//!     }
//! }
//!
//! let backend = HeadlessBackend::with_events([
//!     RawEvent::left_press(5.0, 5.0),
//!     RawEvent::release(50.0, 50.0),
//!     RawEvent::Quit,
//! ]);
//! let mut app = App::new(AppConfig::new(100, 100).title("Demo"), backend).unwrap();
//! let id = app.add_widget(Region::new(0.0, 0.0, 10.0, 10.0), Counter::default());
//! app.launch().unwrap();
//!
//! assert_eq!(app.focused(), Some(id));
//! assert!(!app.is_running());
//! // One full flush at launch, then one scoped flush for the click.
//! assert_eq!(
//!     app.backend().flushes(),
//!     &[None, Some(Region::new(0.0, 0.0, 10.0, 10.0))]
//! );
//! ```
//!
//! ## Threading
//!
//! Everything runs on the thread that calls [`App::launch`] or
//! [`App::dispatch`]; each event is fully processed before the next is pulled.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod event;
pub mod headless;
pub mod hover;
pub mod router;
pub mod widget;

pub use app::App;
pub use backend::Backend;
pub use config::{AppConfig, DEFAULT_TITLE, Icon};
pub use error::{Error, Result};
pub use event::{KeyCode, MouseButtons, RawEvent};
pub use kurbo::{Point, Rect};
pub use plinth_region::Region;
pub use widget::{EventCx, PaintCx, Widget, WidgetId};
