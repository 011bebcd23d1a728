// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window configuration and icon loading.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Hello World";

/// Configuration for the application window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Optional window icon. Loaded (and required to exist) at construction.
    pub icon_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a configuration with the default title and no icon.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            title: DEFAULT_TITLE.to_owned(),
            icon_path: None,
        }
    }

    /// Set the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the icon path. An empty path means no icon.
    pub fn icon_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.icon_path = (!path.as_os_str().is_empty()).then_some(path);
        self
    }

    /// Check the window parameters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] if either dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Read the configured icon, if any.
    ///
    /// # Errors
    ///
    /// [`Error::Icon`] if the file cannot be read.
    pub fn load_icon(&self) -> Result<Option<Icon>> {
        self.icon_path.as_deref().map(Icon::load).transpose()
    }
}

/// Raw bytes of an icon resource.
///
/// Decoding is left to the backend; the toolkit only guarantees the resource
/// exists and is readable before any window opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl Icon {
    /// Read an icon file.
    ///
    /// # Errors
    ///
    /// [`Error::Icon`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| Error::Icon {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self {
            path: path.to_owned(),
            bytes,
        })
    }

    /// Where the icon was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("plinth-config-{}-{name}", std::process::id()))
    }

    #[test]
    fn defaults() {
        let c = AppConfig::new(400, 600);
        assert_eq!(c.title, DEFAULT_TITLE);
        assert_eq!(c.icon_path, None);
        assert!(c.validate().is_ok());
        assert_eq!(c.load_icon().unwrap(), None);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = AppConfig::new(0, 600).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidSize { width: 0, height: 600 }));
        assert!(AppConfig::new(400, 0).validate().is_err());
    }

    #[test]
    fn empty_icon_path_means_none() {
        let c = AppConfig::new(1, 1).icon_path("");
        assert_eq!(c.icon_path, None);
    }

    #[test]
    fn missing_icon_fails() {
        let path = scratch("missing.bmp");
        let c = AppConfig::new(1, 1).title("My App").icon_path(&path);
        let err = c.load_icon().unwrap_err();
        match err {
            Error::Icon { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn icon_bytes_are_loaded() {
        let path = scratch("icon.bmp");
        std::fs::write(&path, b"BM\x00\x01").unwrap();
        let icon = AppConfig::new(1, 1)
            .icon_path(&path)
            .load_icon()
            .unwrap()
            .unwrap();
        assert_eq!(icon.bytes(), b"BM\x00\x01");
        assert_eq!(icon.path(), path.as_path());
        std::fs::remove_file(&path).unwrap();
    }
}
