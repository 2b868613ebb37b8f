//! Text transforms applied to a raw field value before tokenization.
//!
//! Each transform is a standalone pure function; [`preprocess`] chains them
//! in a fixed order.

use std::sync::LazyLock;

use regex::Regex;

use crate::algo::lexicon;
use crate::bundle::Source;

struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

fn rewrite(pattern: &str, replacement: &'static str) -> Rewrite {
    Rewrite {
        pattern: Regex::new(pattern).expect("unit regex"),
        replacement,
    }
}

/// Unit shorthand rewrites, applied in order. Later rules see the output of
/// earlier ones, so `6.5"D` becomes `6.5 in` before the inch rule runs.
static UNIT_REWRITES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        // 6.5"D x 11"W x 7"H. A bare `1800 W` also reads as inches here.
        rewrite(r#"(\d+(?:\.\d+)?)\s*["”']?\s*[dDwWhH]\b"#, "${1} in"),
        // 11-inch, 11 inches, 1.5in
        rewrite(
            r#"(?i)(\d+(?:\.\d+)?)(?:\s*[-"]\s*|\s*)(?:inches|inch|in)\b"#,
            "${1} in",
        ),
        // 7" or 7”
        rewrite(r#"(\d+(?:\.\d+)?)\s*["”]"#, "${1} in "),
        rewrite(r"(?i)(\d+(?:\.\d+)?)\s*(?:pounds|lbs?)\b", "${1} lb"),
        rewrite(
            r"(?i)(\d+(?:\.\d+)?)\s*(?:centimeters|centimetres|cm)\b",
            "${1} cm",
        ),
        rewrite(
            r"(?i)(\d+(?:\.\d+)?)\s*(?:millimeters|millimetres|mm)\b",
            "${1} mm",
        ),
        rewrite(r"(?i)(\d+(?:\.\d+)?)\s*(?:feet|foot|ft)\b", "${1} ft"),
        rewrite(r"(?i)(\d+(?:\.\d+)?)\s*watts?\b", "${1} watts"),
        rewrite(r"(?i)(\d+(?:\.\d+)?)\s*(?:volts?|v)\b", "${1} v"),
    ]
});

static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*\d+\s*\]").expect("citation regex"));
static CARET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\^\s*").expect("caret regex"));

struct TitleRule {
    host_marker: &'static str,
    patterns: Vec<Regex>,
}

static TITLE_RULES: LazyLock<Vec<TitleRule>> = LazyLock::new(|| {
    let marketplaces = lexicon::MARKETPLACE_HOSTS.iter().map(|(marker, brand)| TitleRule {
        host_marker: marker,
        patterns: vec![
            Regex::new(&format!(r"(?i)^{}(?:\.\w+)?\s*:\s*", regex::escape(brand)))
                .expect("brand prefix regex"),
            Regex::new(r"\s*:\s*[^:]+$").expect("department suffix regex"),
        ],
    });
    let encyclopedias = lexicon::ENCYCLOPEDIA_HOSTS.iter().map(|(marker, site)| TitleRule {
        host_marker: marker,
        patterns: vec![
            Regex::new(&format!(r"(?i)\s*[-–]\s*{}.*$", regex::escape(site)))
                .expect("site suffix regex"),
        ],
    });
    marketplaces.chain(encyclopedias).collect()
});

/// Keep only the value half of a `key: value` spec row.
pub fn spec_value(text: &str) -> &str {
    match text.split_once(':') {
        Some((_, value)) => value,
        None => text,
    }
}

/// Rewrite dimension and unit shorthand to `<number> <unit>`.
pub fn normalize_units(text: &str) -> String {
    UNIT_REWRITES
        .iter()
        .fold(text.to_string(), |acc, rule| {
            rule.pattern
                .replace_all(&acc, rule.replacement)
                .into_owned()
        })
}

/// Remove `[12]`-style citation markers and caret reference glyphs.
pub fn strip_citations(text: &str) -> String {
    let without_markers = CITATION.replace_all(text, "");
    CARET.replace_all(&without_markers, " ").into_owned()
}

/// Host-aware title cleanup: marketplace brand prefix / department suffix,
/// encyclopedia site-name suffix.
pub fn clean_title(title: &str, host: &str) -> String {
    let host = host.to_lowercase();
    let mut cleaned = title.trim().to_string();
    for rule in TITLE_RULES.iter() {
        if !host.contains(rule.host_marker) {
            continue;
        }
        for pattern in &rule.patterns {
            cleaned = pattern.replace(&cleaned, "").into_owned();
        }
    }
    cleaned.trim().to_string()
}

/// Full pre-tokenization chain for one field value.
pub fn preprocess(text: &str, source: Source) -> String {
    let text = if source == Source::Spec {
        spec_value(text)
    } else {
        text
    };
    strip_citations(&normalize_units(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_value_keeps_value() {
        assert_eq!(spec_value("Wattage: 1800 watts").trim(), "1800 watts");
        assert_eq!(spec_value("Time: 10:30").trim(), "10:30");
        assert_eq!(spec_value("no colon here"), "no colon here");
    }

    #[test]
    fn dimensions_become_inches() {
        assert_eq!(
            normalize_units(r#"6.5"D x 11"W x 7"H"#),
            "6.5 in x 11 in x 7 in"
        );
    }

    #[test]
    fn bare_w_suffix_reads_as_dimension() {
        assert_eq!(normalize_units("1800 W heater"), "1800 in heater");
        assert_eq!(normalize_units("1800W heater"), "1800 in heater");
    }

    #[test]
    fn inch_variants() {
        assert_eq!(normalize_units("11-inch skillet"), "11 in skillet");
        assert_eq!(normalize_units("a 1.5in gap"), "a 1.5 in gap");
        assert_eq!(normalize_units("12 inches wide"), "12 in wide");
    }

    #[test]
    fn weight_and_metric_units() {
        assert_eq!(normalize_units("3 lbs"), "3 lb");
        assert_eq!(normalize_units("2 Pounds"), "2 lb");
        assert_eq!(normalize_units("5cm"), "5 cm");
        assert_eq!(normalize_units("40 millimetres"), "40 mm");
        assert_eq!(normalize_units("6 feet"), "6 ft");
    }

    #[test]
    fn electrical_units() {
        assert_eq!(normalize_units("1800 Watts"), "1800 watts");
        assert_eq!(normalize_units("120 V"), "120 v");
        assert_eq!(normalize_units("240volts"), "240 v");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(normalize_units("toaster oven"), "toaster oven");
        assert_eq!(normalize_units("4 in 1"), "4 in 1");
    }

    #[test]
    fn citations_removed() {
        assert_eq!(strip_citations("born in Ohio[12] and"), "born in Ohio and");
        assert_eq!(strip_citations("fact [ 3 ]"), "fact ");
        assert_eq!(strip_citations("claim^ source"), "claim source");
    }

    #[test]
    fn marketplace_title() {
        assert_eq!(
            clean_title(
                "Amazon.com: CPT-122 4-Slice Toaster: Kitchen & Dining",
                "www.amazon.com"
            ),
            "CPT-122 4-Slice Toaster"
        );
    }

    #[test]
    fn encyclopedia_title() {
        assert_eq!(
            clean_title("Ada Lovelace - Wikipedia", "en.wikipedia.org"),
            "Ada Lovelace"
        );
        assert_eq!(
            clean_title("Ada Lovelace – Wikipedia, the free encyclopedia", "en.wikipedia.org"),
            "Ada Lovelace"
        );
    }

    #[test]
    fn other_hosts_untouched() {
        assert_eq!(
            clean_title("  Amazon.com: Something: Else ", "example.com"),
            "Amazon.com: Something: Else"
        );
    }

    #[test]
    fn preprocess_spec_row() {
        assert_eq!(preprocess("Wattage: 1800 watts", Source::Spec).trim(), "1800 watts");
        // Only spec rows get their key dropped.
        assert_eq!(preprocess("Wattage: 1800 watts", Source::Bullet), "Wattage: 1800 watts");
    }
}
