//! Removal of promotional boilerplate from titles and descriptions.
//!
//! Each suffix pattern is applied once, in profile order, and is expected to
//! run through the end of the string. That keeps cleaning idempotent: the
//! leftmost match is removed, so nothing matching remains in the prefix.

use regex::Regex;

use crate::profile::ExtractionProfile;

/// Cleans a title with the built-in Ridero profile.
///
/// Strips `"— купить книгу …"`-style suffixes and anything after a `|`.
#[must_use]
pub fn clean_title(title: &str) -> String {
    ExtractionProfile::ridero().clean_title(title)
}

/// Cleans a description with the built-in Ridero profile.
///
/// Strips a trailing `"Купите книгу …"` / `"Читайте онлайн …"` call to action.
#[must_use]
pub fn clean_description(description: &str) -> String {
    ExtractionProfile::ridero().clean_description(description)
}

impl ExtractionProfile {
    #[must_use]
    pub fn clean_title(&self, title: &str) -> String {
        strip_suffixes(&self.title_suffixes, title)
    }

    #[must_use]
    pub fn clean_description(&self, description: &str) -> String {
        strip_suffixes(&self.description_suffixes, description)
    }
}

fn strip_suffixes(patterns: &[Regex], text: &str) -> String {
    let mut out = text.to_string();
    for re in patterns {
        let stripped = re.replace(&out, "").into_owned();
        out = stripped;
    }
    out.trim().to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
