// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swatches.
//!
//! Three color swatches react to hover, clicks, and the space bar. A
//! scripted headless session drives them and prints what ended up on screen.
//!
//! Run:
//! - `RUST_LOG=plinth=trace cargo run -p plinth_demos --example swatches`

use kurbo::Point;
use plinth::headless::{Canvas, HeadlessBackend, Rgba};
use plinth::{App, AppConfig, Backend, EventCx, KeyCode, PaintCx, RawEvent, Region, Widget};
use tracing_subscriber::EnvFilter;

const RED: Rgba = [255, 0, 0, 255];
const LIGHT_RED: Rgba = [255, 100, 100, 255];
const BLUE: Rgba = [0, 0, 255, 255];
const WHITE: Rgba = [255, 255, 255, 255];
const MAGENTA: Rgba = [255, 0, 255, 255];
const GREEN: Rgba = [0, 255, 0, 255];

struct Swatch {
    name: &'static str,
    color: Rgba,
}

impl Swatch {
    fn new(name: &'static str) -> Self {
        Self { name, color: RED }
    }

    fn set(&mut self, cx: &mut EventCx<'_>, color: Rgba) {
        self.color = color;
        cx.request_repaint();
    }
}

impl Widget<Canvas> for Swatch {
    fn paint(&mut self, cx: &PaintCx, surface: &mut Canvas) {
        surface.fill_rect(cx.rect(), self.color);
        if cx.is_focused() {
            surface.stroke_rect(cx.rect(), GREEN);
        }
    }

    fn destroy(&mut self) {
        tracing::info!(swatch = self.name, "destroyed");
    }

    fn mouse_enter(&mut self, cx: &mut EventCx<'_>, _pos: Point) {
        if self.color == RED {
            self.set(cx, LIGHT_RED);
        }
    }

    fn mouse_leave(&mut self, cx: &mut EventCx<'_>, _pos: Point) {
        if self.color == LIGHT_RED {
            self.set(cx, RED);
        }
    }

    fn mouse_click(&mut self, cx: &mut EventCx<'_>, _pos: Point) {
        self.set(cx, BLUE);
    }

    fn mouse_release(&mut self, cx: &mut EventCx<'_>, _pos: Point) {
        self.set(cx, RED);
    }

    fn mouse_right_click(&mut self, cx: &mut EventCx<'_>, _pos: Point) {
        self.set(cx, WHITE);
    }

    fn key_down(&mut self, cx: &mut EventCx<'_>, code: KeyCode) {
        if code == KeyCode::SPACE {
            self.set(cx, MAGENTA);
        }
    }

    fn key_up(&mut self, cx: &mut EventCx<'_>, code: KeyCode) {
        if code == KeyCode::SPACE {
            self.set(cx, RED);
        }
    }

    fn focus(&mut self, cx: &mut EventCx<'_>) {
        cx.request_repaint();
    }
}

fn main() -> plinth::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = HeadlessBackend::with_events([
        RawEvent::move_to(50.0, 50.0),
        RawEvent::move_to(150.0, 50.0),
        RawEvent::left_press(150.0, 50.0),
        RawEvent::release(300.0, 300.0),
        RawEvent::right_press(250.0, 50.0),
        RawEvent::KeyPress(KeyCode::SPACE),
    ]);
    let mut app = App::new(AppConfig::new(400, 600).title("My App"), backend)?;
    let first = app.add_widget(Region::new(10.0, 10.0, 100.0, 100.0), Swatch::new("first"));
    let second = app.add_widget(Region::new(120.0, 10.0, 100.0, 100.0), Swatch::new("second"));
    let third = app.add_widget(Region::new(220.0, 10.0, 100.0, 100.0), Swatch::new("third"));

    // Run the scripted events, then inspect before the session ends.
    app.open()?;
    while let Some(event) = app.backend_mut().next_event() {
        let _ = app.dispatch(event);
    }

    println!("focused: {:?}, hovered: {:?}", app.focused(), app.hovered());
    if let Some(canvas) = app.surface() {
        let probes = [
            ("first", first, 60, 60),
            ("second", second, 170, 60),
            ("third", third, 270, 60),
        ];
        for (name, id, x, y) in probes {
            println!(
                "{name} ({id:?}): fill {:?}, corner {:?}",
                canvas.pixel(x, y),
                canvas.pixel(x - 50, y - 50)
            );
        }
    }
    println!("flushes: {:?}", app.backend().flushes());

    let _ = app.dispatch(RawEvent::Quit);
    Ok(())
}
