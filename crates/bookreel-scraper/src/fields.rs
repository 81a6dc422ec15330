//! Per-field extractors.
//!
//! Every extractor is a pure `(markup) -> Option<value>` cascade: strategies
//! are tried in rank order and the first usable value wins. Substituting the
//! profile fallback for a miss is the aggregator's job, not the extractor's.

use regex::Regex;

use crate::html::{clean_capture, find_meta_content, first_heading_text};
use crate::jsonld::json_ld_author;
use crate::profile::ExtractionProfile;

type Strategy = fn(&str) -> Option<String>;

const TITLE_STRATEGIES: [Strategy; 2] = [og_title, first_heading_text];

fn og_title(html: &str) -> Option<String> {
    find_meta_content(html, "og:title")
}

/// Runs the ranked `patterns` over `html` and returns the first capture
/// (group 1) that `parse` accepts. Later matches of the same pattern are
/// tried before falling through to the next pattern.
fn first_value<T>(patterns: &[Regex], html: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    patterns.iter().find_map(|re| {
        re.captures_iter(html)
            .find_map(|caps| parse(caps.get(1)?.as_str()))
    })
}

/// Each candidate is cleaned before it is accepted, so a title that is all
/// boilerplate falls through to the next strategy.
pub(crate) fn extract_title(html: &str, profile: &ExtractionProfile) -> Option<String> {
    TITLE_STRATEGIES.iter().find_map(|strategy| {
        strategy(html)
            .map(|raw| profile.clean_title(&raw))
            .filter(|cleaned| !cleaned.is_empty())
    })
}

pub(crate) fn extract_description(html: &str) -> Option<String> {
    find_meta_content(html, "og:description")
}

pub(crate) fn extract_cover_url(html: &str) -> Option<String> {
    find_meta_content(html, "og:image")
}

pub(crate) fn extract_author(html: &str, profile: &ExtractionProfile) -> Option<String> {
    json_ld_author(html).or_else(|| first_value(&profile.author, html, clean_capture))
}

pub(crate) fn extract_genre(html: &str, profile: &ExtractionProfile) -> Option<String> {
    first_value(&profile.genre, html, clean_capture)
}

pub(crate) fn extract_pages(html: &str, profile: &ExtractionProfile) -> Option<u32> {
    first_value(&profile.pages, html, |raw| raw.trim().parse::<u32>().ok())
}

pub(crate) fn extract_age_rating(html: &str, profile: &ExtractionProfile) -> Option<String> {
    first_value(&profile.age_rating, html, clean_capture)
}

pub(crate) fn extract_rating(html: &str, profile: &ExtractionProfile) -> Option<f64> {
    first_value(&profile.rating, html, parse_rating)
}

pub(crate) fn extract_review_count(html: &str, profile: &ExtractionProfile) -> Option<u32> {
    first_value(&profile.review_count, html, |raw| raw.trim().parse::<u32>().ok())
}

/// The length window applies to the raw capture, before entity decoding.
pub(crate) fn extract_author_bio(html: &str, profile: &ExtractionProfile) -> Option<String> {
    first_value(&profile.author_bio, html, |raw| {
        if profile.author_bio_chars.contains(raw.chars().count()) {
            clean_capture(raw)
        } else {
            None
        }
    })
}

/// Accepts a decimal comma (`"4,8"`) as well as a period.
fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim()
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
