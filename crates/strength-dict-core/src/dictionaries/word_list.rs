//! Frequency-ranked word lists (`top10`, `top10k`).

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::{Asset, LogicalName, parse_json};
use crate::error::AssetResult;

/// Words ordered from most to least common.
///
/// Ranks are 1-based. A word listed more than once keeps its best rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl WordList {
    /// 1-based frequency rank of `word`, matched exactly.
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// Whether `word` appears in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Iterate words from most to least common.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The words as a slice, in rank order.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Number of listed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Asset for WordList {
    fn decode(name: LogicalName, raw: &str) -> AssetResult<Self> {
        let words: Vec<String> = parse_json(name, raw)?;
        let mut ranks = HashMap::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            ranks.entry(word.clone()).or_insert(index + 1);
        }
        Ok(Self { words, ranks })
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Serialize for WordList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;

    fn decode(raw: &str) -> AssetResult<WordList> {
        WordList::decode(LogicalName::Top10k, raw)
    }

    #[test]
    fn ranks_are_one_based() {
        let list = decode(r#"["123456", "password", "qwerty"]"#).unwrap();
        assert_eq!(list.rank("123456"), Some(1));
        assert_eq!(list.rank("qwerty"), Some(3));
        assert_eq!(list.rank("hunter2"), None);
    }

    #[test]
    fn rank_is_case_sensitive() {
        let list = decode(r#"["password"]"#).unwrap();
        assert!(list.contains("password"));
        assert!(!list.contains("Password"));
    }

    #[test]
    fn duplicates_keep_best_rank() {
        let list = decode(r#"["a", "b", "a"]"#).unwrap();
        assert_eq!(list.rank("a"), Some(1));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn empty_entries_are_kept() {
        let list = decode(r#"["a", ""]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.rank(""), Some(2));
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn non_string_entries_are_malformed() {
        let err = decode("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AssetError::Malformed { name: LogicalName::Top10k, .. }));
    }

    #[test]
    fn embedded_top10_starts_with_most_common() {
        let top10 = &crate::Dictionaries::embedded().unwrap().top10;
        assert_eq!(top10.iter().next(), Some("123456"));
        assert_eq!(top10.len(), 10);
    }
}
