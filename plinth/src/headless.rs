// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory display backend.
//!
//! [`HeadlessBackend`] paints into a [`Canvas`] pixel buffer, replays a
//! scripted queue of [`RawEvent`]s, and records every flush. It is what the
//! tests and the demos run against; a windowing backend implements the same
//! [`Backend`] trait.

use std::collections::VecDeque;
use std::ops::Range;
use std::path::PathBuf;

use kurbo::Rect;
use plinth_region::Region;
use thiserror::Error;

use crate::backend::Backend;
use crate::config::{AppConfig, Icon};
use crate::event::RawEvent;

/// An RGBA color, one byte per channel.
pub type Rgba = [u8; 4];

/// Opaque black, the color of a fresh canvas.
pub const BLACK: Rgba = [0, 0, 0, 255];

/// A fixed-size RGBA pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Create a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Fill the whole canvas.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Fill every pixel whose cell overlaps `rect`, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let xs = span(rect.x0, rect.x1, self.width);
        for y in span(rect.y0, rect.y1, self.height) {
            for x in xs.clone() {
                self.put(x, y, color);
            }
        }
    }

    /// Draw a one pixel outline along the inside of `rect`, clipped to the canvas.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
        let xs = span(rect.x0, rect.x1, self.width);
        let ys = span(rect.y0, rect.y1, self.height);
        if xs.is_empty() || ys.is_empty() {
            return;
        }
        for x in xs.clone() {
            self.put(x, ys.start, color);
            self.put(x, ys.end - 1, color);
        }
        for y in ys {
            self.put(xs.start, y, color);
            self.put(xs.end - 1, y, color);
        }
    }

    fn put(&mut self, x: usize, y: usize, color: Rgba) {
        let w = self.width as usize;
        self.pixels[y * w + x] = color;
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Both ends are clamped to [0, limit] before the cast."
)]
fn span(lo: f64, hi: f64, limit: u32) -> Range<usize> {
    let lo = lo.max(0.0).floor();
    let hi = hi.min(f64::from(limit)).ceil();
    if lo < hi {
        lo as usize..hi as usize
    } else {
        0..0
    }
}

/// What the dispatcher asked the headless display to open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opened {
    /// Window width.
    pub width: u32,
    /// Window height.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Where the icon came from, if one was given.
    pub icon: Option<PathBuf>,
}

/// Failures of the headless display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadlessError {
    /// The requested window does not fit the simulated screen.
    #[error("requested {width}x{height} window exceeds the {max_width}x{max_height} screen")]
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Screen width.
        max_width: u32,
        /// Screen height.
        max_height: u32,
    },
}

/// Scripted, in-memory [`Backend`].
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    events: VecDeque<RawEvent>,
    screen: Option<(u32, u32)>,
    opened: Option<Opened>,
    flushes: Vec<Option<Region<f64>>>,
    closed: bool,
}

impl HeadlessBackend {
    /// A backend with no scripted events and an unbounded screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that will replay `events` in order.
    pub fn with_events(events: impl IntoIterator<Item = RawEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Limit the simulated screen; larger windows fail to open.
    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen = Some((width, height));
        self
    }

    /// Queue one more event.
    pub fn push_event(&mut self, event: RawEvent) {
        self.events.push_back(event);
    }

    /// Number of events not yet consumed.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Parameters of the opened window, if any.
    pub fn opened(&self) -> Option<&Opened> {
        self.opened.as_ref()
    }

    /// Every flush so far; `None` is a whole-surface flush.
    pub fn flushes(&self) -> &[Option<Region<f64>>] {
        &self.flushes
    }

    /// Take and reset the flush log.
    pub fn take_flushes(&mut self) -> Vec<Option<Region<f64>>> {
        std::mem::take(&mut self.flushes)
    }

    /// Whether [`Backend::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Backend for HeadlessBackend {
    type Surface = Canvas;
    type Error = HeadlessError;

    fn open(&mut self, config: &AppConfig, icon: Option<&Icon>) -> Result<Canvas, HeadlessError> {
        if let Some((max_width, max_height)) = self.screen
            && (config.width > max_width || config.height > max_height)
        {
            return Err(HeadlessError::TooLarge {
                width: config.width,
                height: config.height,
                max_width,
                max_height,
            });
        }
        self.opened = Some(Opened {
            width: config.width,
            height: config.height,
            title: config.title.clone(),
            icon: icon.map(|i| i.path().to_owned()),
        });
        Ok(Canvas::new(config.width, config.height))
    }

    fn flush(&mut self, _surface: &mut Canvas, region: Option<Region<f64>>) {
        tracing::trace!(?region, "headless flush");
        self.flushes.push(region);
    }

    fn next_event(&mut self) -> Option<RawEvent> {
        self.events.pop_front()
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];
    const GREEN: Rgba = [0, 255, 0, 255];

    #[test]
    fn fill_covers_cells_and_clips() {
        let mut c = Canvas::new(20, 20);
        c.fill_rect(Rect::new(10.0, 10.0, 30.0, 30.0), RED);
        assert_eq!(c.pixel(10, 10), Some(RED));
        assert_eq!(c.pixel(19, 19), Some(RED));
        assert_eq!(c.pixel(9, 10), Some(BLACK));
        assert_eq!(c.pixel(20, 20), None);
    }

    #[test]
    fn fill_outside_is_a_no_op() {
        let mut c = Canvas::new(4, 4);
        c.fill_rect(Rect::new(-10.0, -10.0, -1.0, -1.0), RED);
        c.fill_rect(Rect::new(8.0, 8.0, 9.0, 9.0), RED);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(c.pixel(x, y), Some(BLACK));
            }
        }
    }

    #[test]
    fn stroke_draws_only_the_border() {
        let mut c = Canvas::new(10, 10);
        c.stroke_rect(Rect::new(2.0, 2.0, 6.0, 6.0), GREEN);
        assert_eq!(c.pixel(2, 2), Some(GREEN));
        assert_eq!(c.pixel(5, 5), Some(GREEN));
        assert_eq!(c.pixel(2, 4), Some(GREEN));
        assert_eq!(c.pixel(3, 3), Some(BLACK));
        assert_eq!(c.pixel(6, 6), Some(BLACK));
    }

    #[test]
    fn open_respects_screen_size() {
        let mut b = HeadlessBackend::new().with_screen(800, 600);
        let err = b.open(&AppConfig::new(1024, 100), None).unwrap_err();
        assert!(matches!(err, HeadlessError::TooLarge { width: 1024, .. }));
        assert!(b.opened().is_none());

        let canvas = b.open(&AppConfig::new(400, 600).title("My App"), None).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (400, 600));
        let opened = b.opened().unwrap();
        assert_eq!(opened.title, "My App");
        assert_eq!(opened.icon, None);
    }

    #[test]
    fn events_replay_in_order() {
        let mut b = HeadlessBackend::with_events([RawEvent::move_to(1.0, 1.0)]);
        b.push_event(RawEvent::Quit);
        assert_eq!(b.pending_events(), 2);
        assert_eq!(b.next_event(), Some(RawEvent::move_to(1.0, 1.0)));
        assert_eq!(b.next_event(), Some(RawEvent::Quit));
        assert_eq!(b.next_event(), None);
    }

    #[test]
    fn flushes_are_recorded() {
        let mut b = HeadlessBackend::new();
        let mut c = b.open(&AppConfig::new(10, 10), None).unwrap();
        b.flush(&mut c, None);
        b.flush(&mut c, Some(Region::new(0.0, 0.0, 5.0, 5.0)));
        assert_eq!(b.flushes().len(), 2);
        assert_eq!(
            b.take_flushes(),
            vec![None, Some(Region::new(0.0, 0.0, 5.0, 5.0))]
        );
        assert!(b.flushes().is_empty());
        assert!(!b.is_closed());
        b.close();
        assert!(b.is_closed());
    }
}
