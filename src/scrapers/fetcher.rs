//! Listing page download.
//!
//! The pipeline only needs "address in, raw markup out", so the transport sits
//! behind the [`Fetcher`] trait. [`HttpFetcher`] is the reqwest-backed
//! implementation used by the binary; tests substitute canned markup.

use crate::error::{Error, Result};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Retrieves raw markup for an address.
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Fetches pages over HTTP(S) with a single GET and no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(default_user_agent())
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &Url) -> Result<String> {
        let fetch_err = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(fetch_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(fetch_err)?;
        info!(bytes = body.len(), %status, "Fetched listing page");
        debug!(preview = %truncate_for_log(&body, 200), "Listing body");
        Ok(body)
    }
}

fn default_user_agent() -> String {
    format!(
        "{}/{} (rust; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
