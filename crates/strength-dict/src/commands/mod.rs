//! Command implementations.

use anyhow::Context;
use camino::Utf8PathBuf;
use strength_dict_core::{
    AssetSource, Dictionaries, DirectorySource, EmbeddedSource, OverlaySource, load_dictionaries,
};

pub mod check;
pub mod dump;
pub mod info;
pub mod list;
pub mod lookup;
pub mod show;

/// Which asset source the commands read from.
///
/// Built once in `main` from the `--dict-dir`/`--require-all` flags and the
/// loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct DictionarySelection {
    /// Directory of replacement asset files. Embedded assets when `None`.
    pub dir: Option<Utf8PathBuf>,
    /// When `true`, every asset must come from `dir`.
    pub require_all: bool,
}

impl DictionarySelection {
    /// The source implied by this selection.
    pub fn source(&self) -> Box<dyn AssetSource> {
        match self.dir {
            None => Box::new(EmbeddedSource),
            Some(ref dir) if self.require_all => Box::new(DirectorySource::new(dir)),
            Some(ref dir) => Box::new(OverlaySource::new(DirectorySource::new(dir), EmbeddedSource)),
        }
    }

    /// Load all six assets, failing on the first one that cannot be loaded.
    pub fn load(&self) -> anyhow::Result<Dictionaries> {
        let source = self.source();
        load_dictionaries(&source)
            .with_context(|| format!("failed to load dictionaries ({})", source.describe()))
    }
}
