//! `extract` and `parse` command handlers.
//!
//! A failed fetch is logged and replaced by the placeholder record unless the
//! caller asked for `--strict`, so one dead listing does not abort a batch.

use std::path::Path;

use anyhow::Context;
use bookreel_core::{AppConfig, BookData};
use bookreel_scraper::{FetchError, ListingClient};
use futures::stream::{self, StreamExt};

use crate::profile::active_extractor;

/// Fetches every URL (at most `concurrency` at a time) and prints one JSON
/// document per URL, in input order.
///
/// # Errors
///
/// Returns an error if any URL is not a listing URL (checked before any
/// request is sent), if the client cannot be built, or, with `strict`, on
/// the first fetch failure.
pub(crate) async fn run_extract(
    config: &AppConfig,
    urls: &[String],
    strict: bool,
    concurrency: usize,
) -> anyhow::Result<()> {
    for url in urls {
        bookreel_core::validate_listing_url(url)
            .with_context(|| format!("refusing to fetch '{url}'"))?;
    }

    let client = ListingClient::with_extractor(
        config.fetch_timeout_secs,
        &config.user_agent,
        active_extractor(config)?,
    )?;

    let results: Vec<(&String, Result<BookData, FetchError>)> = stream::iter(urls)
        .map(|url| {
            let client = &client;
            async move { (url, client.extract_book_data(url).await) }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut placeholders = 0usize;
    for (url, result) in results {
        let book = match result {
            Ok(book) => book,
            Err(e) if strict => {
                return Err(anyhow::Error::new(e).context(format!("extracting '{url}'")));
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "fetch failed; using placeholder record");
                placeholders += 1;
                BookData::placeholder()
            }
        };
        println!("{}", serde_json::to_string_pretty(&book)?);
    }

    if placeholders > 0 {
        tracing::warn!(
            placeholders,
            total = urls.len(),
            "some listings fell back to the placeholder record"
        );
    }
    Ok(())
}

/// Extracts book data from a saved page and prints it as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the profile cannot be
/// loaded.
pub(crate) fn run_parse(
    config: &AppConfig,
    file: &Path,
    page_url: Option<&str>,
) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let extractor = active_extractor(config)?;

    let book = match page_url {
        Some(url) => extractor.extract_from_page(url, &html),
        None => extractor.extract(&html),
    };
    println!("{}", serde_json::to_string_pretty(&book)?);
    Ok(())
}
