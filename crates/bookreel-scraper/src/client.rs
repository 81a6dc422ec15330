//! HTTP fetcher for book listing pages.

use std::time::Duration;

use bookreel_core::BookData;
use reqwest::Client;

use crate::error::FetchError;
use crate::extract::BookExtractor;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_RU: &str = "ru-RU,ru;q=0.9,en;q=0.8";

/// Fetches listing pages and runs them through a [`BookExtractor`].
///
/// Non-2xx responses are surfaced as [`FetchError::UnexpectedStatus`]. The
/// client never substitutes placeholder data; that decision belongs to the
/// caller.
#[derive(Debug, Clone)]
pub struct ListingClient {
    client: Client,
    extractor: BookExtractor,
}

impl ListingClient {
    /// Creates a `ListingClient` with the given request timeout and
    /// `User-Agent`, using the built-in Ridero profile.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        Self::with_extractor(timeout_secs, user_agent, BookExtractor::default())
    }

    /// Same as [`new`](Self::new) with a caller-supplied extractor.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_extractor(
        timeout_secs: u64,
        user_agent: &str,
        extractor: BookExtractor,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, extractor })
    }

    #[must_use]
    pub fn extractor(&self) -> &BookExtractor {
        &self.extractor
    }

    /// Downloads the raw markup of a listing page.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `url` does not parse.
    /// - [`FetchError::UnexpectedStatus`] for any non-2xx response.
    /// - [`FetchError::Http`] for network, TLS, timeout, or body-decoding failures.
    pub async fn fetch_listing(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Self::listing_url(url)?;

        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::ACCEPT, ACCEPT_HTML)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_RU)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "listing fetch rejected");
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched listing page");
        Ok(body)
    }

    /// Fetches `url` and extracts a [`BookData`] record from it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`fetch_listing`](Self::fetch_listing).
    /// Extraction itself cannot fail.
    pub async fn extract_book_data(&self, url: &str) -> Result<BookData, FetchError> {
        let html = self.fetch_listing(url).await?;
        Ok(self.extractor.extract_from_page(url, &html))
    }

    fn listing_url(url: &str) -> Result<reqwest::Url, FetchError> {
        reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
