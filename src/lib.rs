//! # Headline Tally
//!
//! Scrapes a news listing page, keeps the headlines that mention any of a set
//! of keywords, and tallies how many kept headlines mention each keyword.
//!
//! ## Pipeline
//!
//! 1. **Fetching**: download the listing page ([`scrapers::fetcher`])
//! 2. **Extraction**: one lowercased title per article node ([`scrapers::headlines`])
//! 3. **Filtering**: keep matching titles up to a cap, then count ([`filter`])
//! 4. **Output**: spreadsheet export and keyword bar chart ([`outputs`])
//!
//! [`pipeline::scrape_and_analyze`] runs all four and returns a
//! [`models::ScrapeReport`].

pub mod cli;
pub mod error;
pub mod filter;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod scrapers;
pub mod utils;

pub use error::{Error, Result};
pub use models::{KeywordCount, KeywordCounts, ScrapeReport};
pub use pipeline::{ScrapeConfig, scrape_and_analyze};
