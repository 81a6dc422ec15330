use serde::{Deserialize, Serialize};

/// Book metadata scraped from a marketplace listing page.
///
/// Required fields are always populated (with profile fallbacks when the page
/// carries no signal). Optional fields are `None` when nothing was found and
/// are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookData {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Empty when the page has no `og:description`.
    pub description: String,
    /// `0` means the page count is unknown.
    pub pages: u32,
    /// E.g. `"16+"`.
    pub age_rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl BookData {
    /// Canned record used by project creation when the listing page cannot be
    /// fetched at all. Every field is meant to be edited by the user later.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            title: "Новая книга".to_string(),
            author: "Автор".to_string(),
            genre: "Художественная литература".to_string(),
            description: String::new(),
            pages: 0,
            age_rating: "12+".to_string(),
            rating: None,
            review_count: None,
            author_bio: None,
            cover_url: None,
        }
    }
}
