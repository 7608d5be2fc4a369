//! Listing page acquisition and headline extraction.
//!
//! Scraping is split in two phases:
//!
//! 1. **Fetching** ([`fetcher`]): download the raw markup of the listing page
//! 2. **Extraction** ([`headlines`]): walk the parsed page and pull one
//!    lowercased title per article node, skipping nodes without one

pub mod fetcher;
pub mod headlines;
