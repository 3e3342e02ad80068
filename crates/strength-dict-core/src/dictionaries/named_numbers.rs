//! English names for powers of ten.
//!
//! Wire format: `[{ "magnitude": 6, "name": "million" }, ...]`, where
//! `magnitude` is the base-ten exponent. Entries keep their source order and
//! any extra fields, so serializing reproduces the asset as loaded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Asset, LogicalName, parse_json};
use crate::error::AssetResult;

/// One named power of ten.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedNumber {
    /// Base-ten exponent.
    pub magnitude: u32,
    /// English name, e.g. `million`.
    pub name: String,
    /// Fields beyond `magnitude` and `name`, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Mapping from base-ten exponent to its English name.
///
/// When a magnitude is listed more than once, lookups use the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamedNumbers {
    entries: Vec<NamedNumber>,
    #[serde(skip)]
    by_magnitude: BTreeMap<u32, usize>,
}

impl NamedNumbers {
    /// Name for exactly `10^magnitude`, if there is one.
    pub fn name_for(&self, magnitude: u32) -> Option<&str> {
        self.by_magnitude
            .get(&magnitude)
            .map(|&index| self.entries[index].name.as_str())
    }

    /// Largest named magnitude whose value does not exceed `value`.
    pub fn largest_at_most(&self, value: f64) -> Option<(u32, &str)> {
        if !value.is_finite() || value < 1.0 {
            return None;
        }
        self.by_magnitude
            .iter()
            .rev()
            .find(|(magnitude, _)| power_of_ten(**magnitude) <= value)
            .map(|(magnitude, &index)| (*magnitude, self.entries[index].name.as_str()))
    }

    /// Spell out a large value, e.g. `1_500_000.0` becomes `"1.5 million"`.
    ///
    /// The value is rounded to one decimal place of its magnitude before the
    /// name is picked, so `999_999.99` reads `"1 million"`. Values below the
    /// smallest named magnitude are formatted as plain numbers.
    pub fn describe(&self, value: f64) -> String {
        let scale = self
            .largest_at_most(value)
            .map_or(1.0, |(magnitude, _)| power_of_ten(magnitude));
        let rounded = round_tenth(value / scale) * scale;
        match self.largest_at_most(rounded) {
            Some((magnitude, name)) => {
                format!("{} {name}", format_scaled(rounded / power_of_ten(magnitude)))
            }
            None => format_scaled(rounded),
        }
    }

    /// Iterate `(magnitude, name)` pairs in ascending magnitude.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.by_magnitude
            .iter()
            .map(|(magnitude, &index)| (*magnitude, self.entries[index].name.as_str()))
    }

    /// Entries in asset order, duplicates included.
    pub fn entries(&self) -> &[NamedNumber] {
        &self.entries
    }

    /// Number of entries in the asset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the asset has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn power_of_ten(magnitude: u32) -> f64 {
    10f64.powi(i32::try_from(magnitude).unwrap_or(i32::MAX))
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal place, dropping a trailing `.0`.
fn format_scaled(value: f64) -> String {
    let rounded = round_tenth(value);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

impl Asset for NamedNumbers {
    fn decode(name: LogicalName, raw: &str) -> AssetResult<Self> {
        let entries: Vec<NamedNumber> = parse_json(name, raw)?;
        let mut by_magnitude = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_magnitude.entry(entry.magnitude).or_insert(index);
        }
        Ok(Self {
            entries,
            by_magnitude,
        })
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
