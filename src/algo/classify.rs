use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bundle::ContentBundle;

static COMMERCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\badd to cart\b|\bbuy now\b|\bsku\b|\bmodel\b|\bprice\b").expect("commerce regex")
});
static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s?\d+(?:[.,]\d{2})?").expect("price regex"));
static NEWS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bnews\b|\bbreaking\b|\bcnn\b|\bassociated press\b").expect("news regex")
});
static BYLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[Bb]y [A-Z][a-z]+\b").expect("byline regex"));

/// Words in the leading paragraphs above which a page reads as an article.
pub const ARTICLE_MIN_WORDS: usize = 60;

/// Coarse page genre reported alongside the topics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Product,
    Article,
    News,
    #[default]
    Other,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Article => "article",
            Self::News => "news",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify from the title, first heading and first two paragraphs.
pub fn classify_page(bundle: &ContentBundle) -> PageType {
    let lead: Vec<&str> = std::iter::once(bundle.title.as_str())
        .chain(bundle.headings.iter().take(1).map(String::as_str))
        .chain(bundle.paragraphs.iter().take(2).map(String::as_str))
        .collect();
    let text = lead.join(" ");

    if COMMERCE.is_match(&text) || PRICE.is_match(&text) {
        return PageType::Product;
    }
    if NEWS.is_match(&text) || BYLINE.is_match(&text) {
        return PageType::News;
    }
    let words: usize = bundle
        .paragraphs
        .iter()
        .take(3)
        .map(|p| p.split_whitespace().count())
        .sum();
    if words > ARTICLE_MIN_WORDS {
        return PageType::Article;
    }
    PageType::Other
}
