use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::algo::lexicon;

static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-]+$").expect("segment regex"));
static SEGMENT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9\-]+").expect("segment run regex"));

/// Parse a URL, assuming `https://` when the scheme is missing.
pub fn parse(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let with_scheme = if !trimmed.contains("://") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };
    Url::parse(&with_scheme).ok()
}

/// Lowercase host, or "" when the URL has none.
pub fn host(raw: &str) -> String {
    parse(raw)
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_default()
}

/// Path segments that can carry topic words: purely alphanumeric-hyphen and
/// not on the routing blocklist (`dp`, `ref`, `gp`, ...).
pub fn topical_segments(raw: &str) -> Vec<String> {
    let Some(parsed) = parse(raw) else {
        return Vec::new();
    };
    parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .filter(|s| SEGMENT.is_match(s))
        .filter(|s| !lexicon::is_low_signal_segment(&s.to_lowercase()))
        .map(String::from)
        .collect()
}

/// All topical segment runs joined into one text blob for phrase extraction.
pub fn path_text(raw: &str) -> String {
    topical_segments(raw)
        .iter()
        .flat_map(|s| SEGMENT_RUN.find_iter(s).map(|m| m.as_str().to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
