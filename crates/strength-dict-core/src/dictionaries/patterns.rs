//! Keyboard rows and character runs that make weak passwords.
//!
//! The pattern list is compiled once into an ASCII case-insensitive
//! Aho-Corasick automaton, so [`Patterns::find_in`] scans a text in one pass.
//! Empty patterns stay in the list but are left out of the automaton.

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Serialize, Serializer};

use super::{Asset, LogicalName, parse_json};
use crate::error::{AssetError, AssetResult};

/// A pattern found inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternMatch<'a> {
    /// The pattern as listed in the asset.
    pub pattern: &'a str,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
}

/// Ordered list of text patterns.
#[derive(Debug, Clone)]
pub struct Patterns {
    patterns: Vec<String>,
    matcher: AhoCorasick,
    /// Position in `patterns` of each automaton pattern id.
    indices: Vec<usize>,
}

impl Patterns {
    /// Non-overlapping pattern occurrences in `text`, leftmost-longest first.
    pub fn find_in<'a>(&'a self, text: &str) -> Vec<PatternMatch<'a>> {
        self.matcher
            .find_iter(text)
            .map(|m| PatternMatch {
                pattern: &self.patterns[self.indices[m.pattern().as_usize()]],
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Whether any pattern occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Iterate patterns in asset order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether there are no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl PartialEq for Patterns {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns
    }
}

impl Eq for Patterns {}

impl Asset for Patterns {
    fn decode(name: LogicalName, raw: &str) -> AssetResult<Self> {
        let patterns: Vec<String> = parse_json(name, raw)?;
        let indices: Vec<usize> = patterns
            .iter()
            .enumerate()
            .filter(|(_, pattern)| !pattern.is_empty())
            .map(|(index, _)| index)
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(indices.iter().map(|&index| &patterns[index]))
            .map_err(|e| AssetError::invalid(name, format!("cannot compile patterns: {e}")))?;
        Ok(Self {
            patterns,
            matcher,
            indices,
        })
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Serialize for Patterns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.patterns)
    }
}
