//! Where raw asset text comes from.
//!
//! [`AssetSource`] is the seam between the aggregator and storage. The
//! embedded manifest is the default; a [`DirectorySource`] reads a directory
//! of replacement files, and an [`OverlaySource`] layers one over another.

use std::borrow::Cow;
use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};

use crate::assets;
use crate::dictionaries::LogicalName;
use crate::error::{AssetError, AssetResult};

/// Supplies raw asset text by logical name.
pub trait AssetSource {
    /// Fetch the raw text of `name`.
    fn fetch(&self, name: LogicalName) -> AssetResult<Cow<'static, str>>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn fetch(&self, name: LogicalName) -> AssetResult<Cow<'static, str>> {
        (**self).fetch(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn fetch(&self, name: LogicalName) -> AssetResult<Cow<'static, str>> {
        (**self).fetch(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The assets compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl AssetSource for EmbeddedSource {
    fn fetch(&self, name: LogicalName) -> AssetResult<Cow<'static, str>> {
        Ok(Cow::Borrowed(assets::embedded_asset(name)))
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Asset files under a base directory, named by [`LogicalName::file_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    base: Utf8PathBuf,
}

impl DirectorySource {
    /// Read assets from `base`.
    pub fn new(base: impl AsRef<Utf8Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// The base directory.
    pub fn base(&self) -> &Utf8Path {
        &self.base
    }

    /// Path the asset `name` is read from.
    pub fn path_of(&self, name: LogicalName) -> Utf8PathBuf {
        self.base.join(name.file_name())
    }

    /// Logical names whose files are absent from the directory.
    pub fn missing(&self) -> Vec<LogicalName> {
        LogicalName::ALL
            .into_iter()
            .filter(|name| !self.path_of(*name).is_file())
            .collect()
    }
}

impl AssetSource for DirectorySource {
    #[tracing::instrument(skip(self), fields(base = %self.base))]
    fn fetch(&self, name: LogicalName) -> AssetResult<Cow<'static, str>> {
        let path = self.path_of(name);
        match std::fs::read_to_string(path.as_std_path()) {
            Ok(text) => Ok(Cow::Owned(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AssetError::Missing { name, path }),
            Err(source) => Err(AssetError::Read { name, path, source }),
        }
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.base)
    }
}

/// Tries `primary` first and falls back to `fallback` for missing assets.
///
/// Only [`AssetError::Missing`] triggers the fallback. An asset that exists
/// in the primary source but cannot be read or decoded stays an error.
#[derive(Debug, Clone)]
pub struct OverlaySource<P, F> {
    primary: P,
    fallback: F,
}

impl<P: AssetSource, F: AssetSource> OverlaySource<P, F> {
    /// Layer `primary` over `fallback`.
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: AssetSource, F: AssetSource> AssetSource for OverlaySource<P, F> {
    fn fetch(&self, name: LogicalName) -> AssetResult<Cow<'static, str>> {
        match self.primary.fetch(name) {
            Err(AssetError::Missing { path, .. }) => {
                tracing::debug!(asset = %name, %path, "asset not overridden, using fallback");
                self.fallback.fetch(name)
            }
            other => other,
        }
    }

    fn describe(&self) -> String {
        format!("{} over {}", self.primary.describe(), self.fallback.describe())
    }
}
