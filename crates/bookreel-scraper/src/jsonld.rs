//! schema.org JSON-LD lookups.
//!
//! Blocks are parsed into untyped [`serde_json::Value`] trees and walked with
//! guarded `get`/`as_*` chains. A block that fails to parse is skipped.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("valid json-ld script regex")
});

/// Parses every JSON-LD block in document order, dropping malformed ones.
pub(crate) fn json_ld_blocks(html: &str) -> Vec<Value> {
    SCRIPT_RE
        .captures_iter(html)
        .filter_map(|cap| {
            let raw = cap.get(1).map_or("", |m| m.as_str()).trim();
            if raw.is_empty() {
                return None;
            }
            match serde_json::from_str::<Value>(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::trace!(error = %e, "skipping malformed json-ld block");
                    None
                }
            }
        })
        .collect()
}

/// `author.name` from the first JSON-LD node that carries one.
pub(crate) fn json_ld_author(html: &str) -> Option<String> {
    json_ld_blocks(html).iter().find_map(author_from_node)
}

fn author_from_node(node: &Value) -> Option<String> {
    match node {
        Value::Array(items) => items.iter().find_map(author_from_node),
        Value::Object(map) => map
            .get("author")
            .and_then(author_name)
            .or_else(|| map.get("@graph").and_then(author_from_node)),
        _ => None,
    }
}

/// Accepts `{"name": ..}`, a list of those, or a bare string.
fn author_name(author: &Value) -> Option<String> {
    let name = match author {
        Value::Object(map) => map.get("name").and_then(Value::as_str),
        Value::Array(items) => return items.iter().find_map(author_name),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }?;
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
