//! Input data model: the labeled text bundle produced by the content extractor,
//! the provenance tags attached to every candidate, and the boundary document
//! that carries either a bundle or an upstream failure.

use serde::{Deserialize, Serialize};

/// The field a candidate phrase was extracted from.
///
/// Closed set so that weight lookups can't fragment on a misspelled tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Title,
    Heading,
    Meta,
    Og,
    Twitter,
    BodyParagraph,
    Bullet,
    Spec,
    Url,
    ImageAlt,
    ListItem,
    Anchor,
    Button,
    Placeholder,
    CssClass,
    CssId,
    StructuredData,
}

impl Source {
    /// Provenance weight used by the scorer's source boost.
    pub fn weight(self) -> f64 {
        match self {
            Self::Title | Self::Og => 2.5,
            Self::Heading | Self::Twitter => 2.0,
            Self::ListItem => 1.8,
            Self::Spec | Self::StructuredData => 1.2,
            Self::Bullet => 1.1,
            Self::Url => 1.0,
            Self::Placeholder | Self::CssId => 0.8,
            Self::CssClass => 0.6,
            Self::BodyParagraph | Self::ImageAlt => 0.5,
            Self::Meta | Self::Anchor => 0.3,
            Self::Button => 0.2,
        }
    }

    /// Title, og and twitter phrases get stricter de-duplication.
    pub fn is_title_like(self) -> bool {
        matches!(self, Self::Title | Self::Og | Self::Twitter)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Heading => "heading",
            Self::Meta => "meta",
            Self::Og => "og",
            Self::Twitter => "twitter",
            Self::BodyParagraph => "body-paragraph",
            Self::Bullet => "bullet",
            Self::Spec => "spec",
            Self::Url => "url",
            Self::ImageAlt => "image-alt",
            Self::ListItem => "list-item",
            Self::Anchor => "anchor",
            Self::Button => "button",
            Self::Placeholder => "placeholder",
            Self::CssClass => "css-class",
            Self::CssId => "css-id",
            Self::StructuredData => "structured-data",
        }
    }

    pub fn all() -> &'static [Source] {
        &[
            Self::Title,
            Self::Heading,
            Self::Meta,
            Self::Og,
            Self::Twitter,
            Self::BodyParagraph,
            Self::Bullet,
            Self::Spec,
            Self::Url,
            Self::ImageAlt,
            Self::ListItem,
            Self::Anchor,
            Self::Button,
            Self::Placeholder,
            Self::CssClass,
            Self::CssId,
            Self::StructuredData,
        ]
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labeled text lists pulled from one page. Read-only to the engine; every
/// field may be missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentBundle {
    pub title: String,
    pub meta_description: String,
    pub og_title: String,
    pub og_description: String,
    pub twitter_title: String,
    pub twitter_description: String,
    /// All heading levels, pooled in document order.
    pub headings: Vec<String>,
    /// Paragraphs of the detected main-content block.
    pub paragraphs: Vec<String>,
    pub list_items: Vec<String>,
    pub anchor_texts: Vec<String>,
    pub button_texts: Vec<String>,
    pub input_placeholders: Vec<String>,
    pub image_alts: Vec<String>,
    /// Raw structured-data script bodies (JSON-LD and friends).
    pub structured_data: Vec<String>,
    pub semantic_classes: Vec<String>,
    pub semantic_ids: Vec<String>,
    /// Product feature lines ("About this item").
    pub bullets: Vec<String>,
    /// `key: value` spec rows, including a synthesized `Price: $X.YZ` row.
    pub specs: Vec<String>,
}

impl ContentBundle {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Boundary document: what the fetcher/extractor collaborators hand over for
/// one URL. Either `content` is present, or `error` (and usually
/// `status_code`) describes why it isn't.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInput {
    /// Resolved (post-redirect) URL.
    pub url: String,
    #[serde(default)]
    pub content: Option<ContentBundle>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}
