//! Named time periods.
//!
//! Periods keep their asset order. [`Periods::largest_fitting`] compares
//! lengths directly, so the list does not need to be sorted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Asset, LogicalName, parse_json};
use crate::error::AssetResult;

/// A named span of time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Period {
    /// Singular name, e.g. `hour`.
    pub name: String,
    /// Length in seconds.
    pub seconds: u64,
    /// Fields beyond `name` and `seconds`, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Time periods in asset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Periods {
    periods: Vec<Period>,
}

impl Periods {
    /// Look up a period by name. The first match wins.
    pub fn get(&self, name: &str) -> Option<&Period> {
        self.periods.iter().find(|p| p.name == name)
    }

    /// Longest non-empty period that fits in `seconds`.
    ///
    /// Ties go to the period listed first.
    pub fn largest_fitting(&self, seconds: u64) -> Option<&Period> {
        self.periods
            .iter()
            .filter(|p| p.seconds > 0 && p.seconds <= seconds)
            .fold(None, |best: Option<&Period>, p| match best {
                Some(b) if b.seconds >= p.seconds => Some(b),
                _ => Some(p),
            })
    }

    /// Iterate periods in asset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether there are no periods.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl<'a> IntoIterator for &'a Periods {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Asset for Periods {
    fn decode(name: LogicalName, raw: &str) -> AssetResult<Self> {
        let periods = parse_json(name, raw)?;
        Ok(Self { periods })
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;

    fn decode(raw: &str) -> AssetResult<Periods> {
        Periods::decode(LogicalName::Periods, raw)
    }

    fn fitting(periods: &Periods, seconds: u64) -> Option<&str> {
        periods.largest_fitting(seconds).map(|p| p.name.as_str())
    }

    #[test]
    fn largest_fitting_period() {
        let periods = decode(
            r#"[{"name": "second", "seconds": 1},
                {"name": "minute", "seconds": 60},
                {"name": "hour", "seconds": 3600}]"#,
        )
        .unwrap();

        assert_eq!(fitting(&periods, 59), Some("second"));
        assert_eq!(fitting(&periods, 60), Some("minute"));
        assert_eq!(fitting(&periods, 1_000_000), Some("hour"));
        assert!(periods.largest_fitting(0).is_none());
    }

    #[test]
    fn unordered_periods_keep_their_order() {
        let periods = decode(
            r#"[{"name": "hour", "seconds": 3600},
                {"name": "second", "seconds": 1},
                {"name": "minute", "seconds": 60}]"#,
        )
        .unwrap();

        let names: Vec<_> = periods.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["hour", "second", "minute"]);
        assert_eq!(fitting(&periods, 120), Some("minute"));
        assert_eq!(fitting(&periods, 7200), Some("hour"));
    }

    #[test]
    fn zero_length_period_never_fits() {
        let periods = decode(r#"[{"name": "instant", "seconds": 0}]"#).unwrap();
        assert_eq!(periods.len(), 1);
        assert!(periods.largest_fitting(10).is_none());
    }

    #[test]
    fn equal_lengths_prefer_the_first_listed() {
        let periods = decode(
            r#"[{"name": "fortnight", "seconds": 1209600},
                {"name": "two weeks", "seconds": 1209600}]"#,
        )
        .unwrap();
        assert_eq!(fitting(&periods, 2_000_000), Some("fortnight"));
    }

    #[test]
    fn extra_fields_survive_serialization() {
        let raw = r#"[{"name": "minute", "seconds": 60, "plural": "minutes"}]"#;
        let periods = decode(raw).unwrap();
        let source: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_value(&periods).unwrap(), source);
    }

    #[test]
    fn negative_seconds_are_malformed() {
        let err = decode(r#"[{"name": "second", "seconds": -1}]"#).unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }));
    }

    #[test]
    fn embedded_periods_include_common_units() {
        let periods = &crate::Dictionaries::embedded().unwrap().periods;
        assert_eq!(periods.get("day").map(|p| p.seconds), Some(86_400));
        assert_eq!(periods.get("year").map(|p| p.seconds), Some(31_557_600));
    }
}
