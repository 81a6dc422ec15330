use thiserror::Error;

/// Failure to retrieve a listing page. The only error extraction can raise.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid listing URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid {field} pattern #{index}: {source}")]
    InvalidPattern {
        field: &'static str,
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("{field} pattern #{index} has no capture group")]
    MissingCaptureGroup { field: &'static str, index: usize },
}
