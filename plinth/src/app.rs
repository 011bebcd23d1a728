// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The application: widget ownership, event dispatch, and repaint plumbing.

use core::ops::ControlFlow;

use kurbo::Point;
use plinth_region::{Region, RegionList};

use crate::backend::Backend;
use crate::config::{AppConfig, Icon};
use crate::error::{Error, Result};
use crate::event::RawEvent;
use crate::router::{Callback, Dispatch, Router};
use crate::widget::{EventCx, PaintCx, Widget, WidgetId};

struct Slot<S: 'static> {
    widget: Box<dyn Widget<S>>,
    focused: bool,
}

/// Owns the window, the widgets, and the focus/hover state.
///
/// ## Usage
///
/// 1) Build with [`App::new`], which validates the configuration and loads
///    the icon.
/// 2) Register widgets with [`App::add_widget`]. Insertion order is hit-test
///    priority: where regions overlap, the earliest widget wins.
/// 3) Either call [`App::launch`] to open the window and consume the
///    backend's events until quit, or call [`App::open`] and feed events
///    through [`App::dispatch`] yourself.
///
/// Each event is processed to completion: every routed callback runs, then
/// every repaint the callbacks requested is painted and flushed, one widget
/// region at a time.
pub struct App<B: Backend> {
    config: AppConfig,
    icon: Option<Icon>,
    backend: B,
    surface: Option<B::Surface>,
    widgets: RegionList<f64, Slot<B::Surface>>,
    router: Router<WidgetId>,
    pending: Vec<WidgetId>,
    running: bool,
}

impl<B: Backend> core::fmt::Debug for App<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("open", &self.surface.is_some())
            .field("widgets", &self.widgets)
            .field("focused", &self.router.focused())
            .field("hovered", &self.router.hovered())
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl<B: Backend> App<B> {
    /// Create an application over `backend`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] or [`Error::Icon`] if the configuration is unusable.
    pub fn new(config: AppConfig, backend: B) -> Result<Self> {
        config.validate()?;
        let icon = config.load_icon()?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            title = %config.title,
            icon = icon.is_some(),
            "application created"
        );
        Ok(Self {
            config,
            icon,
            backend,
            surface: None,
            widgets: RegionList::new(),
            router: Router::new(),
            pending: Vec::new(),
            running: true,
        })
    }

    /// The configuration the application was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The display backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The display backend, mutably (for example to queue events).
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The drawable surface, once open.
    pub fn surface(&self) -> Option<&B::Surface> {
        self.surface.as_ref()
    }

    /// Register a widget covering `region` and return its handle.
    ///
    /// The region is fixed for the widget's lifetime. A widget added after
    /// shutdown is destroyed immediately and never registered; the returned
    /// handle is stale.
    pub fn add_widget<W>(&mut self, region: Region<f64>, widget: W) -> WidgetId
    where
        W: Widget<B::Surface> + 'static,
    {
        let slot = Slot {
            widget: Box::new(widget),
            focused: false,
        };
        let id = self.widgets.push(region, slot);
        if !self.running {
            // The handle is allocated but immediately stale.
            if let Some((_, mut slot)) = self.widgets.remove(id) {
                slot.widget.destroy();
            }
            tracing::warn!(widget = ?id, ?region, "widget added after shutdown; destroyed");
            return id;
        }
        tracing::debug!(widget = ?id, ?region, "widget added");
        id
    }

    /// Remove a widget, returning whether it existed.
    ///
    /// Focus and hover are cleared if they referenced it; no `distract` or
    /// `mouse_leave` is sent. The widget is destroyed unless shutdown already
    /// did so.
    pub fn remove_widget(&mut self, id: WidgetId) -> bool {
        let Some((region, mut slot)) = self.widgets.remove(id) else {
            return false;
        };
        self.router.forget(id);
        self.pending.retain(|p| *p != id);
        if self.running {
            slot.widget.destroy();
        }
        tracing::debug!(widget = ?id, ?region, "widget removed");
        true
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// True if no widget is registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widget handles in insertion (hit-test priority) order.
    pub fn widget_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets.keys()
    }

    /// Region of a widget.
    pub fn region(&self, id: WidgetId) -> Option<Region<f64>> {
        self.widgets.region(id)
    }

    /// The focused widget, if any.
    pub fn focused(&self) -> Option<WidgetId> {
        self.router.focused()
    }

    /// The hovered widget, if any.
    pub fn hovered(&self) -> Option<WidgetId> {
        self.router.hovered()
    }

    /// The focused flag of a widget; `false` for unknown handles.
    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|s| s.focused)
    }

    /// False once shutdown has begun.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether `pos` lies inside the widget's region, edges included.
    pub fn hit_test(&self, id: WidgetId, pos: Point) -> bool {
        self.widgets
            .region(id)
            .is_some_and(|r| r.contains_point(pos.x, pos.y))
    }

    /// The first widget, in insertion order, whose region contains `pos`.
    pub fn widget_pointed(&self, pos: Point) -> Option<WidgetId> {
        self.widgets.first_at(pos.x, pos.y)
    }

    /// Open the window and paint every widget once.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyOpen`] on a second call, [`Error::Backend`] if the
    /// backend cannot open a surface.
    pub fn open(&mut self) -> Result<()> {
        if self.surface.is_some() {
            return Err(Error::AlreadyOpen);
        }
        let surface = self
            .backend
            .open(&self.config, self.icon.as_ref())
            .map_err(|e| Error::Backend(Box::new(e)))?;
        self.surface = Some(surface);
        tracing::debug!(widgets = self.widgets.len(), "window opened");
        self.paint_all();
        Ok(())
    }

    /// Open the window, then process backend events until quit.
    ///
    /// An exhausted event source is treated as quit.
    ///
    /// # Errors
    ///
    /// Same as [`App::open`].
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn launch(&mut self) -> Result<()> {
        self.open()?;
        while let Some(event) = self.backend.next_event() {
            if self.dispatch(event).is_break() {
                return Ok(());
            }
        }
        tracing::debug!("event source exhausted");
        self.shutdown();
        Ok(())
    }

    /// Process one raw event to completion.
    ///
    /// Returns [`ControlFlow::Break`] once the application has shut down;
    /// later events are ignored.
    pub fn dispatch(&mut self, event: RawEvent) -> ControlFlow<()> {
        if !self.running {
            return ControlFlow::Break(());
        }
        if let RawEvent::Quit = event {
            self.shutdown();
            return ControlFlow::Break(());
        }
        let widgets = &self.widgets;
        let route = self
            .router
            .route(&event, |pos| widgets.first_at(pos.x, pos.y));
        tracing::trace!(?event, deliveries = route.len(), "routed");
        self.deliver(route);
        self.flush_repaints();
        ControlFlow::Continue(())
    }

    /// Move focus to `id` as a press would, without clicking.
    ///
    /// Returns false for unknown handles or after shutdown.
    pub fn focus_child(&mut self, id: WidgetId) -> bool {
        if !self.running || !self.widgets.contains_key(id) {
            return false;
        }
        let route = self.router.focus_child(id);
        self.deliver(route);
        self.flush_repaints();
        true
    }

    /// Paint one widget and flush only its region.
    ///
    /// Returns false if the window is not open, the application has shut
    /// down, or the handle is unknown.
    pub fn send_repaint(&mut self, id: WidgetId) -> bool {
        if !self.running {
            return false;
        }
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let Some(region) = self.widgets.region(id) else {
            return false;
        };
        let Some(slot) = self.widgets.get_mut(id) else {
            return false;
        };
        tracing::trace!(widget = ?id, ?region, "repaint");
        slot.widget
            .paint(&PaintCx::new(id, region, slot.focused), surface);
        self.backend.flush(surface, Some(region));
        true
    }

    /// Paint every widget in insertion order, then flush the whole surface.
    ///
    /// Does nothing before [`App::open`] or after shutdown.
    pub fn paint_all(&mut self) {
        if !self.running {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        for (id, region, slot) in self.widgets.iter_mut() {
            slot.widget
                .paint(&PaintCx::new(id, *region, slot.focused), surface);
        }
        self.backend.flush(surface, None);
    }

    /// Destroy every widget in insertion order and close the backend.
    ///
    /// Idempotent; only the first call has any effect.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.pending.clear();
        for (id, _, slot) in self.widgets.iter_mut() {
            tracing::trace!(widget = ?id, "destroy");
            slot.widget.destroy();
        }
        self.backend.close();
        tracing::debug!(widgets = self.widgets.len(), "application shut down");
    }

    fn deliver(&mut self, route: Vec<Dispatch<WidgetId>>) {
        for Dispatch { widget: id, callback } in route {
            let Some(region) = self.widgets.region(id) else {
                continue;
            };
            let Some(slot) = self.widgets.get_mut(id) else {
                continue;
            };
            match callback {
                Callback::Distract => slot.focused = false,
                Callback::Focus => slot.focused = true,
                _ => {}
            }
            tracing::trace!(widget = ?id, ?callback, "deliver");
            let mut cx = EventCx::new(id, region, slot.focused, &mut self.pending);
            let w = &mut slot.widget;
            match callback {
                Callback::Distract => w.distract(&mut cx),
                Callback::Focus => w.focus(&mut cx),
                Callback::MouseClick(pos) => w.mouse_click(&mut cx, pos),
                Callback::MouseRightClick(pos) => w.mouse_right_click(&mut cx, pos),
                Callback::MouseRelease(pos) => w.mouse_release(&mut cx, pos),
                Callback::MouseEnter(pos) => w.mouse_enter(&mut cx, pos),
                Callback::MouseLeave(pos) => w.mouse_leave(&mut cx, pos),
                Callback::MouseMove(pos) => w.mouse_move(&mut cx, pos),
                Callback::KeyDown(code) => w.key_down(&mut cx, code),
                Callback::KeyUp(code) => w.key_up(&mut cx, code),
            }
        }
    }

    fn flush_repaints(&mut self) {
        for id in core::mem::take(&mut self.pending) {
            self.send_repaint(id);
        }
    }
}
