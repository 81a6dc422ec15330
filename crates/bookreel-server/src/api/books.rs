//! Book extraction handlers.
//!
//! `extract` is the "create project" step: it validates the listing URL,
//! fetches the page and, when the fetch fails, substitutes the placeholder
//! record so project creation never blocks on the remote site.

use axum::{extract::State, Extension, Json};
use bookreel_core::BookData;
use bookreel_scraper::ListingClient;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(in crate::api) struct ExtractRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::api) struct ParseRequest {
    pub html: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(in crate::api) enum BookSource {
    Extracted,
    Placeholder,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct ExtractResponse {
    pub book: BookData,
    pub source: BookSource,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct ParseResponse {
    pub book: BookData,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/books/extract: fetch a listing and extract its book data.
pub(in crate::api) async fn extract_book(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ExtractRequest>,
) -> Result<Json<ApiResponse<ExtractResponse>>, ApiError> {
    let url = body.url.trim();
    if let Err(e) = bookreel_core::validate_listing_url(url) {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("url must be a Ridero book listing: {e}"),
        ));
    }

    let (book, source) = extract_or_placeholder(&state.client, url).await;

    Ok(Json(ApiResponse {
        data: ExtractResponse { book, source },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/books/parse: extract book data from caller-supplied markup.
pub(in crate::api) async fn parse_book(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ParseRequest>,
) -> Json<ApiResponse<ParseResponse>> {
    let extractor = state.client.extractor();
    let book = match body.url.as_deref() {
        Some(url) => extractor.extract_from_page(url, &body.html),
        None => extractor.extract(&body.html),
    };

    Json(ApiResponse {
        data: ParseResponse { book },
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Extracts `url`, falling back to [`BookData::placeholder`] on any fetch error.
pub(in crate::api) async fn extract_or_placeholder(
    client: &ListingClient,
    url: &str,
) -> (BookData, BookSource) {
    match client.extract_book_data(url).await {
        Ok(book) => (book, BookSource::Extracted),
        Err(e) => {
            tracing::warn!(url, error = %e, "listing fetch failed; using placeholder record");
            (BookData::placeholder(), BookSource::Placeholder)
        }
    }
}
