//! Static word and phrase tables. All lookups expect lowercase input.

/// English stopwords plus a handful of marketing filler words.
pub fn is_stopword(word: &str) -> bool {
    matches!(
        word,
        "a" | "an" | "the" | "and" | "or" | "but" | "if" | "then" | "else" | "for" | "to"
        | "of" | "in" | "on" | "with" | "by" | "from" | "at" | "as" | "is" | "are" | "was"
        | "were" | "be" | "been" | "being" | "this" | "that" | "these" | "those" | "it"
        | "its" | "itself" | "you" | "your" | "yours" | "yourself" | "yourselves" | "we"
        | "our" | "ours" | "ourselves" | "they" | "their" | "theirs" | "themselves" | "he"
        | "she" | "his" | "her" | "hers" | "herself" | "him" | "himself" | "them" | "us"
        | "i" | "me" | "my" | "myself" | "about" | "into" | "over" | "under" | "up" | "down"
        | "out" | "off" | "so" | "not" | "no" | "nor" | "yes" | "can" | "will" | "make"
        | "makes" | "feature" | "featured" | "control" | "any" | "both" | "once" | "doing"
        | "same" | "own" | "where" | "above" | "below" | "just" | "again" | "here" | "all"
        | "while" | "whom" | "who" | "why" | "what" | "which" | "when" | "how" | "through"
        | "during" | "each" | "had" | "has" | "have" | "having" | "did" | "does" | "do"
        | "against" | "between" | "very" | "until" | "because" | "other" | "too" | "than"
        | "now" | "few" | "more" | "most" | "some" | "such" | "only" | "further" | "before"
        | "after" | "there" | "should" | "am" | "o" | "d" | "s" | "t" | "m" | "y" | "ll"
        | "re" | "ve" | "ma" | "ain" | "aren" | "couldn" | "didn" | "doesn" | "hadn"
        | "hasn" | "haven" | "isn" | "mightn" | "mustn" | "needn" | "shan" | "shouldn"
        | "wasn" | "weren" | "won" | "wouldn" | "don"
    )
}

/// Imperative UI/navigation verbs. A phrase containing one is rejected outright.
pub fn is_ui_verb(word: &str) -> bool {
    matches!(
        word,
        "meet" | "start" | "enter" | "change" | "unmute" | "learn" | "click" | "submit"
            | "contact"
    )
}

pub fn is_pronoun_or_determiner(word: &str) -> bool {
    matches!(
        word,
        "my" | "your" | "our" | "his" | "her" | "their" | "this" | "that" | "these" | "those"
    )
}

/// Storefront chrome. These tokens are removed before n-grams are built.
pub fn is_ecommerce_chrome_token(word: &str) -> bool {
    matches!(
        word,
        "amazon" | "com" | "hello" | "sign" | "account" | "lists" | "returns" | "orders"
        | "cart" | "all" | "today" | "deals" | "prime" | "video" | "registry" | "customer"
        | "service" | "gift" | "cards" | "sell" | "home" | "kitchen" | "share" | "sponsored"
        | "learn" | "more" | "search" | "shift" | "alt" | "view" | "history" | "keyboard"
        | "shortcuts" | "add" | "buying" | "options" | "compare" | "similar" | "items"
        | "previous" | "next" | "set" | "slides" | "ratings" | "stars" | "price" | "prices"
        | "usd" | "deliver" | "delivery" | "india" | "united" | "states" | "watch" | "now"
        | "download" | "pdf" | "link"
    )
}

/// Encyclopedia/navigation chrome.
pub fn is_wiki_chrome_token(word: &str) -> bool {
    matches!(
        word,
        "edit" | "jump" | "navigation" | "sidebar" | "toc" | "table" | "contents" | "toggle"
        | "subsection" | "move" | "hide" | "show" | "top" | "category" | "talk" | "read"
        | "view" | "history" | "source" | "wikipedia" | "wikidata" | "mediawiki"
    )
}

pub fn is_chrome_token(word: &str) -> bool {
    is_ecommerce_chrome_token(word) || is_wiki_chrome_token(word)
}

/// Exact phrases that are always page chrome.
pub const CHROME_PHRASES: &[&str] = &[
    "add to cart",
    "buying options",
    "compare with similar",
    "keyboard shortcuts",
    "hello sign in",
    "returns & orders",
    "gift cards",
    "customer service",
    "today's deals",
    "prime video",
    "0 cart",
    "see more product details",
    "report an issue",
    "product description",
    "product information",
    "warranty & support",
    "from the manufacturer",
    "user manual",
    "visit the store",
    "learn more",
    "move to sidebar",
    "table of contents",
    "edit this at wikidata",
    "toggle subsection",
    "download as pdf",
    "printable version",
    "permanent link",
    "page information",
    "cite this page",
];

/// Platform names whose presence marks a phrase as site infrastructure.
pub const BRAND_MARKERS: &[&str] = &["wikipedia", "wikidata", "mediawiki"];

/// A heading containing any of these is boilerplate, not a topic.
pub const HEADING_CHROME: &[&str] = &[
    "feedback",
    "price",
    "product description",
    "product information",
    "options available",
    "keyboard shortcuts",
    "customers who viewed this item also viewed",
    "similar brands on amazon",
    "warranty & support",
    "product videos",
    "product guidance & documents",
    "from the manufacturer",
    "top brand",
    "safety documents",
    "image unavailable",
    "sorry, there was a problem",
    "product summary",
    "about this item",
    "deals on related products",
    "brands you might like",
    "personal life",
    "career",
    "early life",
    "references",
    "external links",
    "see also",
    "bibliography",
    "notes",
    "further reading",
    "works",
    "media",
    "writing",
    "filmography",
];

/// Substrings that mark a list item or anchor as a table-of-contents entry.
pub const TOC_MARKERS: &[&str] = &["toggle", "subsection", "table of contents"];

/// URL path segments that carry routing, not topic, information.
pub fn is_low_signal_segment(segment: &str) -> bool {
    matches!(
        segment,
        "dp" | "ref" | "gp" | "s" | "bestsellers" | "bestseller" | "sr"
    )
}

/// Marketplace hosts: a host containing the marker gets its `<brand>: ` title
/// prefix and `: <department>` suffix removed.
pub const MARKETPLACE_HOSTS: &[(&str, &str)] = &[("amazon.", "amazon")];

/// Encyclopedia hosts: a host containing the marker gets its ` - <site>` title
/// suffix removed.
pub const ENCYCLOPEDIA_HOSTS: &[(&str, &str)] = &[("wikipedia.org", "wikipedia")];

/// Meta descriptions matching these are storefront boilerplate.
pub const SUPPRESSED_DESCRIPTION_MARKERS: &[&str] = &["amazon", "online shopping"];
