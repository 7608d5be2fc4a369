//! Headline extraction from a parsed listing page.
//!
//! Listing pages are loosely structured: most article nodes carry a heading,
//! some are promos, video tiles or ads that do not. A node without a heading
//! is skipped and never affects its neighbours.
//!
//! # Selectors
//!
//! By default an article node is any `<article>` element and its title is the
//! text of the first `<h4>` inside it. Both are CSS selectors and can be
//! overridden from the command line.

use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

pub const DEFAULT_ARTICLE_TAG: &str = "article";
pub const DEFAULT_TITLE_TAG: &str = "h4";

/// Compiled selectors for article nodes and their title element.
#[derive(Debug, Clone)]
pub struct HeadlineSelectors {
    article: Selector,
    title: Selector,
}

impl HeadlineSelectors {
    /// Compile both selectors. A selector that does not compile means the
    /// document cannot be walked at all, so this is a hard error.
    pub fn new(article_tag: &str, title_tag: &str) -> Result<Self> {
        Ok(Self {
            article: compile(article_tag)?,
            title: compile(title_tag)?,
        })
    }
}

impl Default for HeadlineSelectors {
    fn default() -> Self {
        Self {
            article: Selector::parse(DEFAULT_ARTICLE_TAG).expect("static selector"),
            title: Selector::parse(DEFAULT_TITLE_TAG).expect("static selector"),
        }
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Lowercased text of the first title element under `article`, or `None`
/// when the node has no title element.
pub fn extract_title(article: ElementRef<'_>, selectors: &HeadlineSelectors) -> Option<String> {
    let heading = article.select(&selectors.title).next()?;
    Some(heading.text().collect::<String>().to_lowercase())
}

/// Lazily yield one title per article node, in document order, skipping
/// nodes without a title element.
pub fn headlines<'a>(
    document: &'a Html,
    selectors: &'a HeadlineSelectors,
) -> impl Iterator<Item = String> + 'a {
    document
        .select(&selectors.article)
        .enumerate()
        .filter_map(move |(index, article)| {
            let title = extract_title(article, selectors);
            if title.is_none() {
                debug!(index, "Article node has no title element; skipping");
            }
            title
        })
}
