// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for application setup.
//!
//! Routing never fails: a press that hits nothing or a key with nothing
//! focused is a no-op, not an error. Only startup can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while constructing or opening an [`App`](crate::App).
#[derive(Error, Debug)]
pub enum Error {
    /// The window would have no area.
    #[error("invalid window size: {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The icon resource could not be read.
    #[error("failed to load icon `{}`", .path.display())]
    Icon {
        /// Path from the configuration.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The display backend refused to open a surface.
    #[error("display backend failed to open")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The surface is already open.
    #[error("application window is already open")]
    AlreadyOpen,
}

/// Result type for application setup.
pub type Result<T, E = Error> = core::result::Result<T, E>;
