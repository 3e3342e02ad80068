//! The six dictionary assets and the namespace that binds them.
//!
//! [`load_dictionaries`] resolves every [`LogicalName`] through an
//! [`AssetSource`](crate::source::AssetSource), decodes it into its typed
//! value, and returns a [`Dictionaries`] holding all six. Loading is
//! all-or-nothing: the first asset that fails aborts the load and the error
//! names it.
//!
//! ```
//! use strength_dict_core::Dictionaries;
//!
//! let dicts = Dictionaries::embedded().expect("embedded assets decode");
//! assert_eq!(dicts.top10.rank("password"), Some(2));
//! assert_eq!(dicts.periods.get("minute").map(|p| p.seconds), Some(60));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use camino::Utf8Path;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AssetError, AssetResult};
use crate::source::{AssetSource, DirectorySource, EmbeddedSource};

pub mod character_sets;
pub mod named_numbers;
pub mod patterns;
pub mod periods;
pub mod word_list;

pub use character_sets::{CharacterSet, CharacterSets};
pub use named_numbers::{NamedNumber, NamedNumbers};
pub use patterns::{PatternMatch, Patterns};
pub use periods::{Period, Periods};
pub use word_list::WordList;

/// Stable identifier for one of the six assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogicalName {
    /// Power-of-ten magnitudes and their English names.
    #[cfg_attr(feature = "clap", value(name = "namedNumbers", alias = "named-numbers"))]
    NamedNumbers,
    /// Named character classes.
    #[cfg_attr(
        feature = "clap",
        value(name = "characterSets", alias = "character-sets")
    )]
    CharacterSets,
    /// Named time periods in seconds.
    #[cfg_attr(feature = "clap", value(name = "periods"))]
    Periods,
    /// The ten most common passwords.
    #[cfg_attr(feature = "clap", value(name = "top10"))]
    Top10,
    /// Common passwords ranked by frequency.
    ///
    /// The embedded copy is a curated head of the ranking, a few hundred
    /// entries long. A full list can be supplied through a dictionary
    /// directory.
    #[cfg_attr(feature = "clap", value(name = "top10k"))]
    Top10k,
    /// Keyboard and sequence patterns.
    #[cfg_attr(feature = "clap", value(name = "patterns"))]
    Patterns,
}

impl LogicalName {
    /// Every logical name, in manifest order.
    pub const ALL: [Self; 6] = [
        Self::NamedNumbers,
        Self::CharacterSets,
        Self::Periods,
        Self::Top10,
        Self::Top10k,
        Self::Patterns,
    ];

    /// The export name used in the namespace (`namedNumbers`, `top10k`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NamedNumbers => "namedNumbers",
            Self::CharacterSets => "characterSets",
            Self::Periods => "periods",
            Self::Top10 => "top10",
            Self::Top10k => "top10k",
            Self::Patterns => "patterns",
        }
    }

    /// File stem of the asset (`named-numbers`, `character-sets`, ...).
    pub const fn stem(&self) -> &'static str {
        match self {
            Self::NamedNumbers => "named-numbers",
            Self::CharacterSets => "character-sets",
            Self::Periods => "periods",
            Self::Top10 => "top10",
            Self::Top10k => "top10k",
            Self::Patterns => "patterns",
        }
    }

    /// File name of the asset relative to a dictionary directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::NamedNumbers => "named-numbers.json",
            Self::CharacterSets => "character-sets.json",
            Self::Periods => "periods.json",
            Self::Top10 => "top10.json",
            Self::Top10k => "top10k.json",
            Self::Patterns => "patterns.json",
        }
    }

    /// One-line description of the asset's content.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NamedNumbers => "English names for powers of ten",
            Self::CharacterSets => "named character classes",
            Self::Periods => "named time periods in seconds",
            Self::Top10 => "the ten most common passwords",
            Self::Top10k => "common passwords by frequency (embedded: curated head, not 10k)",
            Self::Patterns => "keyboard rows and character runs",
        }
    }

    /// Comma-separated list of export names, for error messages.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LogicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalName {
    type Err = AssetError;

    /// Accepts the export name, the file stem, or the file name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let key = key.strip_suffix(".json").unwrap_or(key);
        Self::ALL
            .into_iter()
            .find(|n| key.eq_ignore_ascii_case(n.as_str()) || key.eq_ignore_ascii_case(n.stem()))
            .ok_or_else(|| AssetError::UnknownName(s.to_string()))
    }
}

/// A typed asset decoded from its JSON wire format.
pub trait Asset: Sized + Serialize {
    /// Decode raw asset text into its typed form without altering its content.
    fn decode(name: LogicalName, raw: &str) -> AssetResult<Self>;

    /// Number of entries in the asset.
    fn entry_count(&self) -> usize;
}

/// Parse raw JSON, attributing decoder failures to `name`.
pub(crate) fn parse_json<T: DeserializeOwned>(name: LogicalName, raw: &str) -> AssetResult<T> {
    serde_json::from_str(raw).map_err(|source| AssetError::Malformed { name, source })
}

/// All six assets, bound to their logical names.
///
/// Serializes as a JSON object whose keys are exactly the six export names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionaries {
    /// `namedNumbers`
    pub named_numbers: NamedNumbers,
    /// `characterSets`
    pub character_sets: CharacterSets,
    /// `periods`
    pub periods: Periods,
    /// `top10`
    pub top10: WordList,
    /// `top10k`
    pub top10k: WordList,
    /// `patterns`
    pub patterns: Patterns,
}

static EMBEDDED: OnceLock<Dictionaries> = OnceLock::new();

impl Dictionaries {
    /// The assets compiled into this crate, decoded once per process.
    ///
    /// Repeated calls return the same reference.
    pub fn embedded() -> AssetResult<&'static Self> {
        if let Some(dicts) = EMBEDDED.get() {
            return Ok(dicts);
        }
        let loaded = load_dictionaries(&EmbeddedSource)?;
        Ok(EMBEDDED.get_or_init(|| loaded))
    }

    /// Load all six assets from `<dir>/<file_name>`.
    pub fn from_dir(dir: impl AsRef<Utf8Path>) -> AssetResult<Self> {
        load_dictionaries(&DirectorySource::new(dir))
    }

    /// Borrow an asset by logical name.
    pub const fn get(&self, name: LogicalName) -> AssetRef<'_> {
        match name {
            LogicalName::NamedNumbers => AssetRef::NamedNumbers(&self.named_numbers),
            LogicalName::CharacterSets => AssetRef::CharacterSets(&self.character_sets),
            LogicalName::Periods => AssetRef::Periods(&self.periods),
            LogicalName::Top10 => AssetRef::WordList(&self.top10),
            LogicalName::Top10k => AssetRef::WordList(&self.top10k),
            LogicalName::Patterns => AssetRef::Patterns(&self.patterns),
        }
    }

    /// Entry count of every asset, in manifest order.
    pub fn summary(&self) -> Vec<(LogicalName, usize)> {
        LogicalName::ALL
            .into_iter()
            .map(|name| (name, self.get(name).len()))
            .collect()
    }
}

/// A borrowed view of one asset.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum AssetRef<'a> {
    /// See [`NamedNumbers`].
    NamedNumbers(&'a NamedNumbers),
    /// See [`CharacterSets`].
    CharacterSets(&'a CharacterSets),
    /// See [`Periods`].
    Periods(&'a Periods),
    /// `top10` or `top10k`.
    WordList(&'a WordList),
    /// See [`Patterns`].
    Patterns(&'a Patterns),
}

impl AssetRef<'_> {
    /// Number of entries in the referenced asset.
    pub fn len(&self) -> usize {
        match self {
            Self::NamedNumbers(a) => a.len(),
            Self::CharacterSets(a) => a.len(),
            Self::Periods(a) => a.len(),
            Self::WordList(a) => a.len(),
            Self::Patterns(a) => a.len(),
        }
    }

    /// Whether the referenced asset has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve, decode, and bind all six assets from `source`.
///
/// Assets load in manifest order. The first failure is returned as-is and no
/// partial result is produced.
#[tracing::instrument(skip_all, fields(source = %source.describe()))]
pub fn load_dictionaries<S: AssetSource + ?Sized>(source: &S) -> AssetResult<Dictionaries> {
    tracing::debug!("loading dictionaries");
    let dictionaries = Dictionaries {
        named_numbers: load_asset(source, LogicalName::NamedNumbers)?,
        character_sets: load_asset(source, LogicalName::CharacterSets)?,
        periods: load_asset(source, LogicalName::Periods)?,
        top10: load_asset(source, LogicalName::Top10)?,
        top10k: load_asset(source, LogicalName::Top10k)?,
        patterns: load_asset(source, LogicalName::Patterns)?,
    };
    tracing::info!(assets = LogicalName::ALL.len(), "dictionaries loaded");
    Ok(dictionaries)
}

fn load_asset<A: Asset, S: AssetSource + ?Sized>(source: &S, name: LogicalName) -> AssetResult<A> {
    let raw = source.fetch(name).inspect_err(|e| {
        tracing::warn!(asset = %name, error = %e, "asset fetch failed");
    })?;
    let asset = A::decode(name, &raw)?;
    tracing::debug!(asset = %name, entries = asset.entry_count(), "asset decoded");
    Ok(asset)
}
