use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Scan results keyed by the scanner's own result-group names.
///
/// The mapping keeps insertion order, so iteration and merge precedence are
/// deterministic. Values are whatever JSON the scanner wrote; only values
/// that are non-empty arrays count as finding groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResults(pub Map<String, Value>);

impl ScanResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow union: every entry of `other` is inserted over `self`, so on a
    /// key collision the value from `other` wins (no concatenation). A key
    /// already present keeps its position in the iteration order.
    pub fn merge(&mut self, other: ScanResults) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Result groups that are non-empty arrays, in key order.
    pub(crate) fn finding_groups(&self) -> impl Iterator<Item = &[Value]> {
        self.0
            .values()
            .filter_map(|value| value.as_array())
            .filter(|group| !group.is_empty())
            .map(|group| group.as_slice())
    }
}

/// One flagged location as reported by the scanner.
///
/// `rule` is an open property bag describing the violated rule; its
/// `statement` entry carries the offending source text and is omitted from
/// rendered reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub filename: String,
    pub line: Number,
    pub rule: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(value: Value) -> ScanResults {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_merge_disjoint_keys_is_union() {
        let mut merged = results(json!({"xss": [1]}));
        merged.merge(results(json!({"csrf": [2]})));

        assert_eq!(merged, results(json!({"xss": [1], "csrf": [2]})));
    }

    #[test]
    fn test_merge_overlapping_key_takes_later_value() {
        let mut merged = results(json!({"xss": [1], "csrf": [2]}));
        merged.merge(results(json!({"xss": [9, 9]})));

        assert_eq!(merged.0["xss"], json!([9, 9]));
        assert_eq!(merged.0["csrf"], json!([2]));
    }

    #[test]
    fn test_finding_groups_skip_empty_and_non_arrays() {
        let all = results(json!({
            "empty": [],
            "count": 3,
            "note": "n/a",
            "csrf": [{"filename": "a", "line": 1, "rule": {}}]
        }));

        let groups: Vec<_> = all.finding_groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
    }
}
