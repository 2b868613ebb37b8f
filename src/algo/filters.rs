//! Rejection predicates for n-grams, normalized phrases and whole field items.
//!
//! The n-gram and phrase checks are ordered rule tables of named pure
//! functions. Each rule returns `true` when it rejects its input.

use std::sync::LazyLock;

use regex::Regex;

use crate::algo::lexicon;

pub type TokenRule = fn(&[String]) -> bool;
pub type PhraseRule = fn(&str) -> bool;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("numeric regex"));
static DIMENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\d+(?:\.\d+)?(?:\s*(?:in|inch|cm|mm|ft))?(?:\s*x\s*\d+(?:\.\d+)?(?:\s*(?:in|inch|cm|mm|ft))?)+\s*(?:in|inch|cm|mm|ft)?$",
    )
    .expect("dimension regex")
});
static KEYBOARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bshift\b.*\balt\b|\bctrl\b|\bopt\b").expect("keyboard regex")
});
static OUTLINE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)*$").expect("outline regex"));
static BARE_X: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?\s*x$|^x\s*\d+(?:\.\d+)?$").expect("bare x regex")
});
static TOC_TOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\(?top\)?$").expect("toc top regex"));
static TOC_OUTLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)*\s").expect("toc outline regex"));

/// N-gram validity rules, checked in order.
pub const NGRAM_RULES: &[(&str, TokenRule)] = &[
    ("all-numeric", all_numeric),
    ("all-stopwords", all_stopwords),
    ("all-single-char", all_single_char),
    ("stopword-edge", stopword_edge),
    ("stopword-heavy", stopword_heavy),
    ("weak-unigram", weak_unigram),
    ("ui-verb", contains_ui_verb),
];

/// Noise rules over a normalized phrase, checked in order.
pub const PHRASE_RULES: &[(&str, PhraseRule)] = &[
    ("empty", is_empty_phrase),
    ("chrome-phrase", is_chrome_phrase),
    ("dimension", is_dimension_phrase),
    ("chrome-heavy", is_chrome_heavy),
    ("keyboard-shortcut", has_keyboard_shortcut),
    ("brand-marker", has_brand_marker),
    ("outline-number", is_outline_number),
    ("bare-dimension-x", is_bare_dimension_fragment),
];

fn lower(token: &str) -> String {
    token.to_lowercase()
}

pub fn is_numeric(token: &str) -> bool {
    NUMERIC.is_match(token)
}

// ── N-gram rules ─────────────────────────────────────────────────────────────

pub fn all_numeric(tokens: &[String]) -> bool {
    tokens.iter().all(|t| is_numeric(t))
}

pub fn all_stopwords(tokens: &[String]) -> bool {
    tokens.iter().all(|t| lexicon::is_stopword(&lower(t)))
}

pub fn all_single_char(tokens: &[String]) -> bool {
    tokens.iter().all(|t| t.chars().count() <= 1)
}

/// Multi-word phrases may not start or end on a stopword or determiner.
pub fn stopword_edge(tokens: &[String]) -> bool {
    if tokens.len() < 2 {
        return false;
    }
    let weak = |t: &String| {
        let t = lower(t);
        lexicon::is_stopword(&t) || lexicon::is_pronoun_or_determiner(&t)
    };
    tokens.first().is_some_and(weak) || tokens.last().is_some_and(weak)
}

pub fn stopword_heavy(tokens: &[String]) -> bool {
    if tokens.len() < 2 {
        return false;
    }
    let stops = tokens
        .iter()
        .filter(|t| lexicon::is_stopword(&lower(t)))
        .count();
    stops as f64 / tokens.len() as f64 >= 0.5
}

pub fn weak_unigram(tokens: &[String]) -> bool {
    let [token] = tokens else {
        return false;
    };
    let t = lower(token);
    is_numeric(&t)
        || lexicon::is_stopword(&t)
        || lexicon::is_ui_verb(&t)
        || lexicon::is_pronoun_or_determiner(&t)
        || t.chars().count() < 3
}

pub fn contains_ui_verb(tokens: &[String]) -> bool {
    tokens.iter().any(|t| lexicon::is_ui_verb(&lower(t)))
}

/// Name of the first rule that rejects this n-gram, if any.
pub fn first_ngram_violation(tokens: &[String]) -> Option<&'static str> {
    if tokens.is_empty() {
        return Some("empty");
    }
    NGRAM_RULES
        .iter()
        .find(|(_, rule)| rule(tokens))
        .map(|(name, _)| *name)
}

pub fn is_valid_ngram(tokens: &[String]) -> bool {
    first_ngram_violation(tokens).is_none()
}

// ── Phrase rules ─────────────────────────────────────────────────────────────

pub fn is_empty_phrase(phrase: &str) -> bool {
    phrase.split_whitespace().next().is_none()
}

pub fn is_chrome_phrase(phrase: &str) -> bool {
    lexicon::CHROME_PHRASES.iter().any(|p| *p == phrase)
}

/// `6.5 x 11 x 7 in` and friends.
pub fn is_dimension_phrase(phrase: &str) -> bool {
    DIMENSION.is_match(phrase)
}

pub fn is_chrome_heavy(phrase: &str) -> bool {
    let tokens: Vec<&str> = phrase.split_whitespace().collect();
    if tokens.is_empty() {
        return false;
    }
    let chrome = tokens
        .iter()
        .filter(|t| lexicon::is_chrome_token(t))
        .count();
    chrome as f64 / tokens.len() as f64 >= 0.5
}

pub fn has_keyboard_shortcut(phrase: &str) -> bool {
    KEYBOARD.is_match(phrase)
}

pub fn has_brand_marker(phrase: &str) -> bool {
    lexicon::BRAND_MARKERS.iter().any(|m| phrase.contains(m))
}

/// Outline stubs such as `1`, `1.2` or `2.1.3`.
pub fn is_outline_number(phrase: &str) -> bool {
    OUTLINE_NUMBER.is_match(phrase)
}

/// `11 x` or `x 7`: half of a dimension.
pub fn is_bare_dimension_fragment(phrase: &str) -> bool {
    BARE_X.is_match(phrase)
}

pub fn first_phrase_violation(phrase: &str) -> Option<&'static str> {
    let p = phrase.trim().to_lowercase();
    PHRASE_RULES
        .iter()
        .find(|(_, rule)| rule(&p))
        .map(|(name, _)| *name)
}

pub fn is_noise_phrase(phrase: &str) -> bool {
    first_phrase_violation(phrase).is_some()
}

// ── Field-item gates ─────────────────────────────────────────────────────────

/// A list item or anchor that reads like a table-of-contents entry.
pub fn is_toc_item(text: &str) -> bool {
    let s = text.trim();
    if TOC_TOP.is_match(s) || TOC_OUTLINE.is_match(s) {
        return true;
    }
    let lowered = s.to_lowercase();
    lexicon::TOC_MARKERS.iter().any(|m| lowered.contains(m))
}

pub fn is_heading_chrome(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    lexicon::HEADING_CHROME.iter().any(|m| lowered.contains(m))
}

/// Meta descriptions that are storefront boilerplate.
pub fn is_suppressed_description(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lexicon::SUPPRESSED_DESCRIPTION_MARKERS
        .iter()
        .any(|m| lowered.contains(m))
}
