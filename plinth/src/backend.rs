// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display backend seam.

use plinth_region::Region;

use crate::config::{AppConfig, Icon};
use crate::event::RawEvent;

/// A display session: opens the drawable surface, presents it, and yields
/// raw input events.
///
/// One value is created at startup and owned by the [`App`](crate::App) for
/// the rest of the session. All calls happen on the dispatcher's thread.
pub trait Backend {
    /// The drawable target widgets paint onto.
    type Surface: 'static;

    /// Failure to open the surface. Fatal for the application.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open a window as described by `config`, with the already-loaded icon.
    fn open(
        &mut self,
        config: &AppConfig,
        icon: Option<&Icon>,
    ) -> Result<Self::Surface, Self::Error>;

    /// Present `region` of the surface, or all of it when `None`.
    fn flush(&mut self, surface: &mut Self::Surface, region: Option<Region<f64>>);

    /// Block until the next event. `None` means the source is exhausted.
    fn next_event(&mut self) -> Option<RawEvent>;

    /// Tear the session down. Called once, after every widget is destroyed.
    fn close(&mut self) {}
}
