use std::sync::LazyLock;

use regex::Regex;

/// Alphanumeric runs, optionally joined by single internal `.` or `-`, so
/// `CPT-122` and `6.5` stay whole.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+(?:[.\-][A-Za-z0-9]+)*").expect("token regex"));
static IDENT_DELIMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("delimiter regex"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("ws regex"));

/// Tokenize text into surface tokens. Case is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every contiguous window of `n` tokens. Yields nothing when `n` is zero or
/// longer than the sequence.
pub fn word_ngrams(tokens: &[String], n: usize) -> impl Iterator<Item = &[String]> {
    let usable = if n == 0 || tokens.len() < n {
        &tokens[..0]
    } else {
        tokens
    };
    usable.windows(n.max(1))
}

/// Display form of an n-gram: lowercase, single-spaced, edge `-`/`_`/space trimmed.
pub fn normalize_phrase(tokens: &[String]) -> String {
    let joined = tokens
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
        .trim_matches(|c: char| c == ' ' || c == '-' || c == '_')
        .to_string()
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Turn a CSS class or id (`product-title`, `productTitle`, `spec_table`) into
/// space-separated words.
pub fn split_identifier(ident: &str) -> String {
    let spaced = IDENT_DELIMS.replace_all(ident, " ");
    CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_model_numbers() {
        let tokens = tokenize("Cuisinart CPT-122 4-Slice Toaster, 6.5 in!");
        assert_eq!(tokens, vec!["Cuisinart", "CPT-122", "4-Slice", "Toaster", "6.5", "in"]);
    }

    #[test]
    fn tokenize_splits_on_double_separators() {
        let tokens = tokenize("alpha--beta a..b");
        assert_eq!(tokens, vec!["alpha", "beta", "a", "b"]);
    }

    #[test]
    fn tokenize_drops_trailing_separator() {
        assert_eq!(tokenize("end. next-"), vec!["end", "next"]);
    }

    #[test]
    fn word_ngrams_basic() {
        let tokens: Vec<String> = vec!["rust".into(), "plugin".into(), "system".into()];
        let ng: Vec<String> = word_ngrams(&tokens, 2).map(|w| w.join(" ")).collect();
        assert_eq!(ng, vec!["rust plugin", "plugin system"]);
    }

    #[test]
    fn word_ngrams_too_short() {
        let tokens: Vec<String> = vec!["rust".into()];
        assert_eq!(word_ngrams(&tokens, 2).count(), 0);
        assert_eq!(word_ngrams(&tokens, 0).count(), 0);
    }

    #[test]
    fn normalize_phrase_lowercases_and_trims() {
        let tokens: Vec<String> = vec!["Toaster".into(), "OVEN".into()];
        assert_eq!(normalize_phrase(&tokens), "toaster oven");
    }

    #[test]
    fn split_identifier_kebab_and_camel() {
        assert_eq!(split_identifier("product-title"), "product title");
        assert_eq!(split_identifier("productTitle"), "product Title");
        assert_eq!(split_identifier("spec__table-row"), "spec table row");
    }
}
