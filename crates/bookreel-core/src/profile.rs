//! Extraction profile data: the locale-specific regex sources, fallback
//! literals and author-bio length window used by the field extractors.
//!
//! Profiles are plain data here. `bookreel-scraper` compiles them into
//! regexes, so an invalid pattern is reported there rather than at load time.
//!
//! Each pattern yields its value from capture group 1.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Literals substituted when a required field has no signal on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackValues {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub age_rating: String,
}

/// Inclusive bounds on the author-bio length, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioWindow {
    pub min: usize,
    pub max: usize,
}

impl Default for BioWindow {
    fn default() -> Self {
        Self { min: 20, max: 500 }
    }
}

impl BioWindow {
    #[must_use]
    pub fn contains(&self, chars: usize) -> bool {
        (self.min..=self.max).contains(&chars)
    }
}

/// Ranked regex sources per field. Earlier entries win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatterns {
    pub name: String,
    pub fallbacks: FallbackValues,
    pub author: Vec<String>,
    pub genre: Vec<String>,
    pub pages: Vec<String>,
    pub age_rating: Vec<String>,
    pub rating: Vec<String>,
    pub review_count: Vec<String>,
    pub author_bio: Vec<String>,
    #[serde(default)]
    pub author_bio_chars: BioWindow,
    /// Trailing promotional fragments removed from the title, applied in order.
    pub title_suffixes: Vec<String>,
    /// Trailing promotional fragments removed from the description, applied in order.
    pub description_suffixes: Vec<String>,
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_string()).collect()
}

impl ProfilePatterns {
    /// Built-in profile for Russian-language Ridero listing pages.
    #[must_use]
    pub fn ridero() -> Self {
        Self {
            name: "ridero".to_string(),
            fallbacks: FallbackValues {
                title: "Без названия".to_string(),
                author: "Неизвестный автор".to_string(),
                genre: "Художественная литература".to_string(),
                age_rating: "12+".to_string(),
            },
            author: owned(&[
                r#"(?i)class=["'][^"']*author[^"']*["'][^>]*>([^<]+)<"#,
                r"(?i)Автор[:\s]*<[^>]+>([^<]+)<",
                r#"(?i)itemprop=["']author["'][^>]*>([^<]+)<"#,
            ]),
            genre: owned(&[
                r"(?i)Жанр[:\s]*<[^>]+>([^<]+)<",
                r#"(?i)class=["'][^"']*genre[^"']*["'][^>]*>([^<]+)<"#,
                r#"(?i)itemprop=["']genre["'][^>]*>([^<]+)<"#,
            ]),
            pages: owned(&[
                r"(?i)([0-9]+)\s*(?:страниц|стр\.?|pages)",
                r"(?i)Объём[:\s]*([0-9]+)",
            ]),
            age_rating: owned(&[r"([0-9]+\+)"]),
            rating: owned(&[
                r#"(?i)itemprop=["']ratingValue["'][^>]*>([0-9.]+)<"#,
                r#"(?i)itemprop=["']ratingValue["'][^>]*content=["']([0-9.,]+)["']"#,
                r"(?i)([0-9]+[.,][0-9]+)\s*(?:из\s*5|/\s*5|★)",
            ]),
            review_count: owned(&[
                r#"(?i)itemprop=["']reviewCount["'][^>]*>([0-9]+)<"#,
                r#"(?i)itemprop=["']reviewCount["'][^>]*content=["']([0-9]+)["']"#,
                r"(?i)([0-9]+)\s*(?:отзыв|review)",
            ]),
            author_bio: owned(&[
                r"(?i)Об авторе[:\s]*<[^>]*>([^<]+)<",
                r#"(?i)class=["'][^"']*author-bio[^"']*["'][^>]*>([^<]+)<"#,
            ]),
            author_bio_chars: BioWindow::default(),
            title_suffixes: owned(&[
                r"(?is)\s*[—–-]\s*(?:купить|читать|скачать|книга).*$",
                r"(?s)\s*\|.*$",
            ]),
            description_suffixes: owned(&[
                r"(?is)Купи(?:те)?\s+книгу.*$",
                r"(?is)Читай(?:те)?\s+онлайн.*$",
            ]),
        }
    }
}

/// Load and validate an extraction profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile_patterns(path: &Path) -> Result<ProfilePatterns, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_profile_patterns(&content)
}

fn parse_profile_patterns(content: &str) -> Result<ProfilePatterns, ConfigError> {
    let patterns: ProfilePatterns = serde_yaml::from_str(content)?;
    validate_profile(&patterns)?;
    Ok(patterns)
}

fn validate_profile(patterns: &ProfilePatterns) -> Result<(), ConfigError> {
    if patterns.name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "profile name must be non-empty".to_string(),
        ));
    }

    let fallbacks = [
        ("title", &patterns.fallbacks.title),
        ("author", &patterns.fallbacks.author),
        ("genre", &patterns.fallbacks.genre),
        ("age_rating", &patterns.fallbacks.age_rating),
    ];
    for (field, value) in fallbacks {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile '{}' has an empty {field} fallback",
                patterns.name
            )));
        }
    }

    let window = patterns.author_bio_chars;
    if window.min > window.max {
        return Err(ConfigError::Validation(format!(
            "profile '{}' has author_bio_chars.min {} above max {}",
            patterns.name, window.min, window.max
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
