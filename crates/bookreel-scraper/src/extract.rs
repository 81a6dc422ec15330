//! Assembly of a [`BookData`] record from one listing page.

use bookreel_core::BookData;

use crate::fields;
use crate::html::absolutize_url;
use crate::profile::ExtractionProfile;

/// Turns listing-page markup into a [`BookData`] record.
///
/// Extraction never fails: a field with no usable signal gets the profile
/// fallback (required fields) or `None` (optional fields). The output depends
/// only on the markup and the profile.
#[derive(Debug, Clone)]
pub struct BookExtractor {
    profile: ExtractionProfile,
}

impl Default for BookExtractor {
    fn default() -> Self {
        Self::new(ExtractionProfile::ridero().clone())
    }
}

impl BookExtractor {
    #[must_use]
    pub fn new(profile: ExtractionProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn profile(&self) -> &ExtractionProfile {
        &self.profile
    }

    /// Extracts every field from `html`.
    #[must_use]
    pub fn extract(&self, html: &str) -> BookData {
        self.build(html, None)
    }

    /// Like [`extract`](Self::extract), but resolves a relative cover URL
    /// against `page_url`. Unresolvable values are kept verbatim.
    #[must_use]
    pub fn extract_from_page(&self, page_url: &str, html: &str) -> BookData {
        self.build(html, Some(page_url))
    }

    fn build(&self, html: &str, page_url: Option<&str>) -> BookData {
        let profile = &self.profile;
        let fallbacks = profile.fallbacks();

        let title =
            fields::extract_title(html, profile).unwrap_or_else(|| fallbacks.title.clone());
        let description = fields::extract_description(html)
            .map(|raw| profile.clean_description(&raw))
            .unwrap_or_default();

        let book = BookData {
            title,
            author: fields::extract_author(html, profile)
                .unwrap_or_else(|| fallbacks.author.clone()),
            genre: fields::extract_genre(html, profile).unwrap_or_else(|| fallbacks.genre.clone()),
            description,
            pages: fields::extract_pages(html, profile).unwrap_or(0),
            age_rating: fields::extract_age_rating(html, profile)
                .unwrap_or_else(|| fallbacks.age_rating.clone()),
            rating: fields::extract_rating(html, profile),
            review_count: fields::extract_review_count(html, profile),
            author_bio: fields::extract_author_bio(html, profile),
            cover_url: fields::extract_cover_url(html).map(|raw| match page_url {
                Some(base) => absolutize_url(base, &raw).unwrap_or(raw),
                None => raw,
            }),
        };

        tracing::debug!(
            profile = profile.name(),
            title = %book.title,
            pages = book.pages,
            has_rating = book.rating.is_some(),
            has_review_count = book.review_count.is_some(),
            has_author_bio = book.author_bio.is_some(),
            has_cover = book.cover_url.is_some(),
            "extracted book data"
        );

        book
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
