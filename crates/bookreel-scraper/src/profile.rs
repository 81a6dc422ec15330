//! Compiled extraction profiles.

use std::sync::LazyLock;

use bookreel_core::{BioWindow, FallbackValues, ProfilePatterns};
use regex::Regex;

use crate::error::ProfileError;

static RIDERO: LazyLock<ExtractionProfile> = LazyLock::new(|| {
    ExtractionProfile::compile(&ProfilePatterns::ridero()).expect("built-in ridero patterns compile")
});

/// Regexes and fallback literals for one family of listing pages.
///
/// Each pattern list is ranked: the extractors try entries in order and the
/// first usable capture wins.
#[derive(Debug, Clone)]
pub struct ExtractionProfile {
    name: String,
    pub(crate) fallbacks: FallbackValues,
    pub(crate) author: Vec<Regex>,
    pub(crate) genre: Vec<Regex>,
    pub(crate) pages: Vec<Regex>,
    pub(crate) age_rating: Vec<Regex>,
    pub(crate) rating: Vec<Regex>,
    pub(crate) review_count: Vec<Regex>,
    pub(crate) author_bio: Vec<Regex>,
    pub(crate) author_bio_chars: BioWindow,
    pub(crate) title_suffixes: Vec<Regex>,
    pub(crate) description_suffixes: Vec<Regex>,
}

impl ExtractionProfile {
    /// Compiles every pattern in `patterns`.
    ///
    /// Extractor patterns must have a capture group; suffix patterns need not.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] naming the first field and index that failed.
    pub fn compile(patterns: &ProfilePatterns) -> Result<Self, ProfileError> {
        Ok(Self {
            name: patterns.name.clone(),
            fallbacks: patterns.fallbacks.clone(),
            author: compile_captures("author", &patterns.author)?,
            genre: compile_captures("genre", &patterns.genre)?,
            pages: compile_captures("pages", &patterns.pages)?,
            age_rating: compile_captures("age_rating", &patterns.age_rating)?,
            rating: compile_captures("rating", &patterns.rating)?,
            review_count: compile_captures("review_count", &patterns.review_count)?,
            author_bio: compile_captures("author_bio", &patterns.author_bio)?,
            author_bio_chars: patterns.author_bio_chars,
            title_suffixes: compile_all("title_suffixes", &patterns.title_suffixes)?,
            description_suffixes: compile_all(
                "description_suffixes",
                &patterns.description_suffixes,
            )?,
        })
    }

    /// The built-in profile for Russian-language Ridero pages.
    #[must_use]
    pub fn ridero() -> &'static Self {
        &RIDERO
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fallbacks(&self) -> &FallbackValues {
        &self.fallbacks
    }
}

fn compile_all(field: &'static str, sources: &[String]) -> Result<Vec<Regex>, ProfileError> {
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| {
            Regex::new(source).map_err(|e| ProfileError::InvalidPattern {
                field,
                index,
                source: e,
            })
        })
        .collect()
}

fn compile_captures(field: &'static str, sources: &[String]) -> Result<Vec<Regex>, ProfileError> {
    let compiled = compile_all(field, sources)?;
    if let Some(index) = compiled.iter().position(|re| re.captures_len() < 2) {
        return Err(ProfileError::MissingCaptureGroup { field, index });
    }
    Ok(compiled)
}
