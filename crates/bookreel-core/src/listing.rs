//! Caller-side validation of marketplace listing URLs.
//!
//! Extraction itself accepts any URL; project creation only accepts Ridero
//! book pages and checks that here before fetching.

use thiserror::Error;
use url::Url;

const LISTING_HOST: &str = "ridero.ru";
const BOOKS_PATH_PREFIX: &str = "/books/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingUrlError {
    #[error("not a valid URL: {0}")]
    Unparseable(String),

    #[error("unsupported URL scheme \"{0}\"; expected http or https")]
    UnsupportedScheme(String),

    #[error("host \"{0}\" is not a Ridero host")]
    WrongHost(String),

    #[error("path \"{0}\" is not a Ridero book page")]
    NotABookPath(String),
}

/// Checks that `raw` points at a Ridero book page (`https://ridero.ru/books/<slug>/`).
///
/// Subdomains of `ridero.ru` are accepted. Returns the parsed URL on success.
///
/// # Errors
///
/// Returns a [`ListingUrlError`] describing the first check that failed.
pub fn validate_listing_url(raw: &str) -> Result<Url, ListingUrlError> {
    let url = Url::parse(raw.trim()).map_err(|e| ListingUrlError::Unparseable(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ListingUrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let host_ok = host == LISTING_HOST || host.ends_with(&format!(".{LISTING_HOST}"));
    if !host_ok {
        return Err(ListingUrlError::WrongHost(host));
    }

    let path = url.path();
    let slug = path.strip_prefix(BOOKS_PATH_PREFIX).unwrap_or_default();
    if slug.trim_matches('/').is_empty() {
        return Err(ListingUrlError::NotABookPath(path.to_string()));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_book_page() {
        let url = validate_listing_url("https://ridero.ru/books/ten_i_svet/").expect("valid");
        assert_eq!(url.host_str(), Some("ridero.ru"));
    }

    #[test]
    fn accepts_subdomain_and_surrounding_whitespace() {
        assert!(validate_listing_url("  https://www.ridero.ru/books/slug  ").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            validate_listing_url("not a url"),
            Err(ListingUrlError::Unparseable(_))
        ));
    }

    #[test]
    fn rejects_ftp_scheme() {
        assert_eq!(
            validate_listing_url("ftp://ridero.ru/books/slug/"),
            Err(ListingUrlError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn rejects_lookalike_host() {
        assert_eq!(
            validate_listing_url("https://notridero.ru/books/slug/"),
            Err(ListingUrlError::WrongHost("notridero.ru".to_string()))
        );
    }

    #[test]
    fn rejects_catalog_root() {
        assert_eq!(
            validate_listing_url("https://ridero.ru/books/"),
            Err(ListingUrlError::NotABookPath("/books/".to_string()))
        );
        assert!(matches!(
            validate_listing_url("https://ridero.ru/authors/someone/"),
            Err(ListingUrlError::NotABookPath(_))
        ));
    }
}
