//! Named character classes (digits, lowercase, symbols, ...).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Asset, LogicalName, parse_json};
use crate::error::AssetResult;

/// A named set of characters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CharacterSet {
    /// Set name, e.g. `lower`.
    pub name: String,
    /// Every character in the set.
    pub characters: String,
    /// Fields beyond `name` and `characters`, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CharacterSet {
    /// Whether `ch` belongs to this set.
    pub fn contains(&self, ch: char) -> bool {
        self.characters.contains(ch)
    }

    /// Number of distinct characters (the set's alphabet size).
    pub fn size(&self) -> usize {
        self.characters.chars().collect::<HashSet<_>>().len()
    }
}

/// Ordered collection of character sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CharacterSets {
    sets: Vec<CharacterSet>,
}

impl CharacterSets {
    /// Look up a set by name. The first match wins.
    pub fn get(&self, name: &str) -> Option<&CharacterSet> {
        self.sets.iter().find(|set| set.name == name)
    }

    /// First set, in asset order, that contains `ch`.
    pub fn set_of(&self, ch: char) -> Option<&CharacterSet> {
        self.sets.iter().find(|set| set.contains(ch))
    }

    /// Iterate sets in asset order.
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterSet> {
        self.sets.iter()
    }

    /// Number of sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether there are no sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<'a> IntoIterator for &'a CharacterSets {
    type Item = &'a CharacterSet;
    type IntoIter = std::slice::Iter<'a, CharacterSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Asset for CharacterSets {
    fn decode(name: LogicalName, raw: &str) -> AssetResult<Self> {
        let sets = parse_json(name, raw)?;
        Ok(Self { sets })
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> AssetResult<CharacterSets> {
        CharacterSets::decode(LogicalName::CharacterSets, raw)
    }

    #[test]
    fn lookup_by_name_and_by_char() {
        let sets = decode(
            r#"[{"name": "number", "characters": "0123456789"},
                {"name": "lower", "characters": "abc"}]"#,
        )
        .unwrap();

        assert_eq!(sets.get("lower").map(|s| s.characters.as_str()), Some("abc"));
        assert_eq!(sets.set_of('7').map(|s| s.name.as_str()), Some("number"));
        assert!(sets.set_of('Z').is_none());
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn order_is_preserved() {
        let sets = decode(
            r#"[{"name": "b", "characters": "b"}, {"name": "a", "characters": "a"}]"#,
        )
        .unwrap();
        let names: Vec<_> = sets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn size_counts_distinct_chars() {
        let set = CharacterSet {
            name: "x".to_string(),
            characters: "aabbc".to_string(),
            extra: Map::new(),
        };
        assert_eq!(set.size(), 3);
    }

    #[test]
    fn duplicate_names_resolve_to_the_first() {
        let sets = decode(r#"[{"name": "a", "characters": "a"}, {"name": "a", "characters": "b"}]"#)
            .unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets.get("a").map(|s| s.characters.as_str()), Some("a"));
        assert_eq!(sets.set_of('b').map(|s| s.characters.as_str()), Some("b"));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let sets = decode(r#"[{"name": "space", "characters": ""}]"#).unwrap();
        assert_eq!(sets.get("space").map(CharacterSet::size), Some(0));
        assert!(sets.set_of(' ').is_none());
    }

    #[test]
    fn extra_fields_survive_serialization() {
        let raw = r#"[{"name": "lower", "characters": "abc", "entropy": 4.7}]"#;
        let sets = decode(raw).unwrap();
        let source: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_value(&sets).unwrap(), source);
    }

    #[test]
    fn embedded_sets_cover_printable_ascii() {
        let sets = &crate::Dictionaries::embedded().unwrap().character_sets;
        for ch in (0x20u8..0x7f).map(char::from) {
            assert!(sets.set_of(ch).is_some(), "{ch:?} has no set");
        }
    }
}
