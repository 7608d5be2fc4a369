//! Data models produced by a single scrape run.
//!
//! - [`ScrapeReport`]: the filtered titles and the per-keyword tally returned
//!   by the pipeline
//! - [`KeywordCounts`]: ordered keyword to count mapping
//! - [`KeywordCount`]: one entry of that mapping

use serde::{Deserialize, Serialize};

/// Result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrapeReport {
    /// Lowercased headlines that matched at least one keyword, in document order.
    pub titles: Vec<String>,
    /// Number of `titles` containing each keyword, in keyword input order.
    pub counts: KeywordCounts,
}

/// How many filtered titles contain a given keyword.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Ordered mapping from keyword to match count.
///
/// Holds exactly one entry per input keyword, zero counts included. Input
/// order is kept, and so are duplicate keywords, which simply repeat the same
/// count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct KeywordCounts(Vec<KeywordCount>);

impl KeywordCounts {
    pub fn new(entries: Vec<KeywordCount>) -> Self {
        Self(entries)
    }

    /// Count for the first entry with this keyword, if present.
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| entry.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum over all entries. May exceed the number of titles when a title
    /// matches several keywords.
    pub fn total(&self) -> usize {
        self.0.iter().map(|entry| entry.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> KeywordCounts {
        KeywordCounts::new(
            pairs
                .iter()
                .map(|(k, c)| KeywordCount {
                    keyword: k.to_string(),
                    count: *c,
                })
                .collect(),
        )
    }

    #[test]
    fn test_get_and_total() {
        let c = counts(&[("bank", 2), ("crisis", 0), ("economy", 1)]);
        assert_eq!(c.get("bank"), Some(2));
        assert_eq!(c.get("crisis"), Some(0));
        assert_eq!(c.get("sports"), None);
        assert_eq!(c.total(), 3);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_keeps_input_order_and_duplicates() {
        let c = counts(&[("economy", 1), ("bank", 1), ("economy", 1)]);
        let keys: Vec<&str> = c.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keys, vec!["economy", "bank", "economy"]);
    }

    #[test]
    fn test_report_serializes_counts_as_ordered_array() {
        let report = ScrapeReport {
            titles: vec!["bank crisis today".to_string()],
            counts: counts(&[("crisis", 1), ("bank", 1)]),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"titles":["bank crisis today"],"counts":[{"keyword":"crisis","count":1},{"keyword":"bank","count":1}]}"#
        );
    }
}
