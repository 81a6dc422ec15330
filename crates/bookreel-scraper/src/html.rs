//! Regex-level HTML helpers shared by the field extractors.
//!
//! Listing pages are never parsed into a DOM; every helper scans the raw
//! markup and tolerates malformed input by returning `None`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// Quoted attribute values may contain a raw `>`.
static META_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("valid regex")
});
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid attr regex")
});
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>([^<]+)</h1>").expect("valid regex"));

/// Longest entity name we try to decode, excluding `&` and `;`.
const MAX_ENTITY_LEN: usize = 10;

/// Returns the decoded `content` of the first `<meta>` whose `property` (or,
/// failing that, `name`) equals `key`, ignoring ASCII case and attribute order.
pub(crate) fn find_meta_content(html: &str, key: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let tag_key = extract_attr(tag, "property").or_else(|| extract_attr(tag, "name"))?;
        if tag_key.trim().eq_ignore_ascii_case(key) {
            extract_attr(tag, "content").and_then(|raw| clean_capture(&raw))
        } else {
            None
        }
    })
}

/// Returns the raw value of `attr` inside a single tag.
pub(crate) fn extract_attr(tag: &str, attr: &str) -> Option<String> {
    ATTR_RE.captures_iter(tag).find_map(|caps| {
        let name = caps.get(1)?.as_str();
        if !name.eq_ignore_ascii_case(attr) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
    })
}

/// Text of the first `<h1>` that holds no nested markup.
pub(crate) fn first_heading_text(html: &str) -> Option<String> {
    H1_RE
        .captures_iter(html)
        .find_map(|caps| clean_capture(caps.get(1)?.as_str()))
}

/// Decodes entities and trims. Blank captures count as a miss.
pub(crate) fn clean_capture(raw: &str) -> Option<String> {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Decodes the named entities common on listing pages plus numeric
/// references. Unknown entities are left as-is.
pub(crate) fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let decoded = tail[1..]
            .bytes()
            .take(MAX_ENTITY_LEN + 1)
            .position(|b| b == b';')
            .filter(|&end| end > 0)
            .and_then(|end| decode_entity(&tail[1..=end]).map(|ch| (ch, end + 2)));

        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        "lt" => '<',
        "gt" => '>',
        "nbsp" => ' ',
        "laquo" => '«',
        "raquo" => '»',
        "mdash" => '—',
        "ndash" => '–',
        "hellip" => '…',
        _ => {
            let numeric = name.strip_prefix('#')?;
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            return char::from_u32(code);
        }
    };
    Some(ch)
}

/// Resolves `candidate` against `base_url`. Returns `None` when the base is
/// not a valid absolute URL or the join fails.
pub(crate) fn absolutize_url(base_url: &str, candidate: &str) -> Option<String> {
    let candidate = candidate.replace("&amp;", "&");
    let base = reqwest::Url::parse(base_url).ok()?;
    base.join(&candidate).ok().map(|u| u.to_string())
}
