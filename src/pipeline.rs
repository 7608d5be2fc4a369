//! End-to-end scrape run: fetch, parse, extract, filter, count, export, render.
//!
//! Everything a run needs is carried by [`ScrapeConfig`] and the collaborators
//! passed to [`scrape_and_analyze`]; nothing is kept between runs.
//!
//! Selectors are compiled before the page is requested. Fetch and selector
//! failures abort the run before anything is exported or rendered. Article
//! nodes without a title are skipped silently.

use crate::error::{Error, Result};
use crate::filter::{count_keywords, filter_titles};
use crate::models::ScrapeReport;
use crate::outputs::chart::{ChartRenderer, build_keyword_chart};
use crate::outputs::xlsx::{TableExporter, build_title_table};
use crate::scrapers::fetcher::Fetcher;
use crate::scrapers::headlines::{
    DEFAULT_ARTICLE_TAG, DEFAULT_TITLE_TAG, HeadlineSelectors, headlines,
};
use scraper::Html;
use tracing::{info, instrument};
use url::Url;

/// Google News "Business" topic page, US English edition.
pub const DEFAULT_URL: &str = "https://news.google.com/topics/CAAqJggKIiBDQkFTRWdvSUwyMHZNRGx6TVdZU0FtVnVHZ0pWVXlnQVAB?hl=en-US&gl=US&ceid=US%3Aen";
pub const DEFAULT_KEYWORDS: [&str; 3] = ["bank", "crisis", "economy"];
pub const DEFAULT_MAX_ARTICLES: usize = 50;

/// Parameters of a single run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Listing page to scrape.
    pub url: Url,
    /// Keywords in report order. Compared against lowercased titles as given.
    pub keywords: Vec<String>,
    /// Cap on the number of matching titles kept.
    pub max_articles: usize,
    /// CSS selector for article nodes.
    pub article_tag: String,
    /// CSS selector for the title element inside an article node.
    pub title_tag: String,
}

impl ScrapeConfig {
    /// Config with default selectors.
    pub fn new(url: &str, keywords: Vec<String>, max_articles: usize) -> Result<Self> {
        let url = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self {
            url,
            keywords,
            max_articles,
            article_tag: DEFAULT_ARTICLE_TAG.to_string(),
            title_tag: DEFAULT_TITLE_TAG.to_string(),
        })
    }
}

/// Run the whole pipeline once and return the filtered titles and counts.
#[instrument(level = "info", skip_all, fields(url = %config.url, max_articles = config.max_articles))]
pub async fn scrape_and_analyze<F: Fetcher>(
    fetcher: &F,
    config: &ScrapeConfig,
    exporter: &dyn TableExporter,
    renderer: &mut dyn ChartRenderer,
) -> Result<ScrapeReport> {
    let selectors = HeadlineSelectors::new(&config.article_tag, &config.title_tag)?;
    let markup = fetcher.fetch(&config.url).await?;
    let document = Html::parse_document(&markup);

    let titles = filter_titles(
        headlines(&document, &selectors),
        &config.keywords,
        config.max_articles,
    );
    let counts = count_keywords(&titles, &config.keywords);
    info!(
        titles = titles.len(),
        keywords = counts.len(),
        matches = counts.total(),
        "Filtered and counted headlines"
    );

    exporter.export(&build_title_table(&titles))?;
    renderer.render(&build_keyword_chart(&counts))?;

    Ok(ScrapeReport { titles, counts })
}
