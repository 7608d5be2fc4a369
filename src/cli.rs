//! Command-line interface definitions for Headline Tally.
//!
//! Every option has a default, so running the binary with no arguments scrapes
//! the Google News business topic for `bank`, `crisis` and `economy`.

use crate::error::Result;
use crate::outputs::xlsx::DEFAULT_EXPORT_PATH;
use crate::pipeline::{DEFAULT_KEYWORDS, DEFAULT_MAX_ARTICLES, DEFAULT_URL, ScrapeConfig};
use crate::scrapers::headlines::{DEFAULT_ARTICLE_TAG, DEFAULT_TITLE_TAG};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Headline Tally application.
///
/// # Examples
///
/// ```sh
/// # Defaults: Google News business topic, bank/crisis/economy, 50 titles
/// headline_tally
///
/// # Custom page and keywords, JSON on stdout
/// headline_tally -u https://news.example.com -k inflation,rates -n 20 --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing page to scrape
    #[arg(short, long, env = "HEADLINE_TALLY_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Comma separated keywords, matched as lowercase substrings
    #[arg(
        short,
        long,
        env = "HEADLINE_TALLY_KEYWORDS",
        value_delimiter = ',',
        default_values = DEFAULT_KEYWORDS
    )]
    pub keywords: Vec<String>,

    /// Maximum number of matching titles to keep
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ARTICLES)]
    pub max_articles: usize,

    /// Path of the spreadsheet export
    #[arg(short, long, default_value = DEFAULT_EXPORT_PATH)]
    pub output: PathBuf,

    /// CSS selector for article nodes
    #[arg(long, default_value = DEFAULT_ARTICLE_TAG)]
    pub article_tag: String,

    /// CSS selector for the title element inside an article node
    #[arg(long, default_value = DEFAULT_TITLE_TAG)]
    pub title_tag: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Skip drawing the keyword chart
    #[arg(long)]
    pub no_chart: bool,

    /// Print the report as JSON instead of the plain summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the pipeline config. Keywords are trimmed and lowercased so they
    /// match the lowercased titles; blank entries are dropped.
    pub fn to_config(&self) -> Result<ScrapeConfig> {
        let keywords = self
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        let mut config = ScrapeConfig::new(&self.url, keywords, self.max_articles)?;
        config.article_tag = self.article_tag.clone();
        config.title_tag = self.title_tag.clone();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["headline_tally"]);

        assert_eq!(cli.keywords, vec!["bank", "crisis", "economy"]);
        assert_eq!(cli.max_articles, 50);
        assert_eq!(cli.output, PathBuf::from("article_titles.xlsx"));
        assert_eq!(cli.article_tag, "article");
        assert_eq!(cli.title_tag, "h4");
        assert!(!cli.json);
        assert!(!cli.no_chart);

        let config = cli.to_config().unwrap();
        assert_eq!(config.url.host_str(), Some("news.google.com"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "headline_tally",
            "-u",
            "https://news.example.com/latest",
            "-k",
            "Inflation, RATES,,",
            "-n",
            "5",
            "-o",
            "/tmp/out.xlsx",
        ]);

        assert_eq!(cli.max_articles, 5);
        assert_eq!(cli.output, PathBuf::from("/tmp/out.xlsx"));

        let config = cli.to_config().unwrap();
        assert_eq!(config.keywords, vec!["inflation", "rates"]);
        assert_eq!(config.url.as_str(), "https://news.example.com/latest");
    }

    #[test]
    fn test_cli_invalid_url() {
        let cli = Cli::parse_from(["headline_tally", "--url", "::nope::"]);
        assert!(cli.to_config().is_err());
    }
}
