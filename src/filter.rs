//! Keyword filtering and per-keyword tallies.
//!
//! Matching is plain substring containment: `"bank"` matches
//! `"bankruptcy filings rise"`. Titles arrive lowercased from the extractor;
//! keywords are compared exactly as given.

use crate::models::{KeywordCount, KeywordCounts};
use tracing::{debug, instrument};

/// True when any keyword occurs as a contiguous substring of `title`.
pub fn contains_keywords<S: AsRef<str>>(title: &str, keywords: &[S]) -> bool {
    keywords.iter().any(|keyword| title.contains(keyword.as_ref()))
}

/// Keep titles matching at least one keyword, in order, up to `max_articles`.
///
/// Iteration stops as soon as the cap is reached, so titles past the cutoff
/// are never pulled from `titles`. Feeding a lazy extractor here makes
/// extraction and filtering a single bounded pass.
#[instrument(level = "debug", skip(titles, keywords), fields(keywords = keywords.len()))]
pub fn filter_titles<I, S>(titles: I, keywords: &[S], max_articles: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    S: AsRef<str>,
{
    let filtered: Vec<String> = titles
        .into_iter()
        .filter(|title| contains_keywords(title, keywords))
        .take(max_articles)
        .collect();
    debug!(kept = filtered.len(), "Filtered titles");
    filtered
}

/// Count, for each keyword, how many of `titles` contain it.
///
/// Pass the capped output of [`filter_titles`]: a keyword that only matches
/// titles past the cutoff gets a count of zero.
pub fn count_keywords<S: AsRef<str>>(titles: &[String], keywords: &[S]) -> KeywordCounts {
    KeywordCounts::new(
        keywords
            .iter()
            .map(|keyword| {
                let keyword = keyword.as_ref();
                KeywordCount {
                    keyword: keyword.to_string(),
                    count: titles.iter().filter(|t| t.contains(keyword)).count(),
                }
            })
            .collect(),
    )
}
