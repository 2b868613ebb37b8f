//! Candidate generation: labeled page fields in, normalized and noise-filtered
//! 1–3 word phrases out, each tagged with the field it came from.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::algo::{filters, lexicon, preprocess, tokenizer, url_phrases};
use crate::bundle::{ContentBundle, Source};

/// Longest n-gram emitted.
pub const MAX_NGRAM: usize = 3;

pub const HEADING_LIMIT: usize = 5;
pub const PARAGRAPH_LIMIT: usize = 6;
pub const BULLET_LIMIT: usize = 12;
pub const SPEC_LIMIT: usize = 20;
pub const IMAGE_ALT_LIMIT: usize = 10;
pub const LIST_ITEM_LIMIT: usize = 20;
pub const ANCHOR_LIMIT: usize = 30;
pub const BUTTON_LIMIT: usize = 10;
pub const PLACEHOLDER_LIMIT: usize = 10;
pub const CSS_CLASS_LIMIT: usize = 20;
pub const CSS_ID_LIMIT: usize = 10;
pub const STRUCTURED_DATA_LIMIT: usize = 2;
/// Structured-data blocks are cut to this many characters.
pub const STRUCTURED_DATA_CHARS: usize = 5000;
/// Anchor texts shorter than this are menu glyphs, not content.
pub const MIN_ANCHOR_CHARS: usize = 3;

/// A normalized phrase plus the field it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub source: Source,
}

impl Candidate {
    pub fn new(text: impl Into<String>, source: Source) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// One field's worth of text, already capped and gated, ready for phrase
/// extraction.
#[derive(Debug, Clone)]
struct FieldJob {
    source: Source,
    texts: Vec<String>,
}

impl FieldJob {
    fn new(source: Source, texts: Vec<String>) -> Self {
        Self { source, texts }
    }

    fn single(source: Source, text: String) -> Option<Self> {
        if text.trim().is_empty() {
            None
        } else {
            Some(Self::new(source, vec![text]))
        }
    }

    fn extract(&self) -> Vec<Candidate> {
        self.texts
            .iter()
            .flat_map(|t| phrases_from_text(t, self.source))
            .collect()
    }
}

fn capped(items: &[String], limit: usize) -> impl Iterator<Item = &String> {
    items.iter().take(limit)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// The fixed field order. Provenance of a repeated phrase is whichever field
/// comes first here.
fn field_plan(bundle: &ContentBundle, url: &str, include_css_topics: bool) -> Vec<FieldJob> {
    let host = url_phrases::host(url);
    let mut plan: Vec<FieldJob> = Vec::new();

    let titles = [
        (&bundle.title, Source::Title),
        (&bundle.og_title, Source::Og),
        (&bundle.twitter_title, Source::Twitter),
    ];
    for (title, source) in titles {
        plan.extend(FieldJob::single(
            source,
            preprocess::clean_title(title, &host),
        ));
    }

    plan.push(FieldJob::new(
        Source::Heading,
        capped(&bundle.headings, HEADING_LIMIT)
            .filter(|h| !filters::is_heading_chrome(h))
            .cloned()
            .collect(),
    ));
    plan.push(FieldJob::new(
        Source::BodyParagraph,
        capped(&bundle.paragraphs, PARAGRAPH_LIMIT).cloned().collect(),
    ));
    plan.push(FieldJob::new(
        Source::Bullet,
        capped(&bundle.bullets, BULLET_LIMIT).cloned().collect(),
    ));
    plan.push(FieldJob::new(
        Source::Spec,
        capped(&bundle.specs, SPEC_LIMIT).cloned().collect(),
    ));

    if !filters::is_suppressed_description(&bundle.meta_description) {
        plan.extend(FieldJob::single(
            Source::Meta,
            bundle.meta_description.clone(),
        ));
    }
    plan.extend(FieldJob::single(Source::Og, bundle.og_description.clone()));
    plan.extend(FieldJob::single(
        Source::Twitter,
        bundle.twitter_description.clone(),
    ));

    plan.push(FieldJob::new(
        Source::ImageAlt,
        capped(&bundle.image_alts, IMAGE_ALT_LIMIT).cloned().collect(),
    ));
    plan.push(FieldJob::new(
        Source::ListItem,
        capped(&bundle.list_items, LIST_ITEM_LIMIT)
            .filter(|li| !filters::is_toc_item(li))
            .cloned()
            .collect(),
    ));
    plan.push(FieldJob::new(
        Source::Anchor,
        bundle
            .anchor_texts
            .iter()
            .filter(|a| a.trim().chars().count() >= MIN_ANCHOR_CHARS)
            .take(ANCHOR_LIMIT)
            .filter(|a| !filters::is_toc_item(a))
            .cloned()
            .collect(),
    ));
    plan.push(FieldJob::new(
        Source::Button,
        capped(&bundle.button_texts, BUTTON_LIMIT).cloned().collect(),
    ));
    plan.push(FieldJob::new(
        Source::Placeholder,
        capped(&bundle.input_placeholders, PLACEHOLDER_LIMIT)
            .cloned()
            .collect(),
    ));

    if include_css_topics {
        plan.push(FieldJob::new(
            Source::CssClass,
            capped(&bundle.semantic_classes, CSS_CLASS_LIMIT)
                .map(|c| tokenizer::split_identifier(c))
                .collect(),
        ));
        plan.push(FieldJob::new(
            Source::CssId,
            capped(&bundle.semantic_ids, CSS_ID_LIMIT)
                .map(|i| tokenizer::split_identifier(i))
                .collect(),
        ));
    }

    plan.extend(FieldJob::single(Source::Url, url_phrases::path_text(url)));

    plan.push(FieldJob::new(
        Source::StructuredData,
        capped(&bundle.structured_data, STRUCTURED_DATA_LIMIT)
            .map(|j| truncate_chars(j, STRUCTURED_DATA_CHARS))
            .collect(),
    ));

    plan
}

/// Run one text through preprocessing, tokenization, n-gram generation and
/// both filter chains.
pub fn phrases_from_text(text: &str, source: Source) -> Vec<Candidate> {
    let prepared = preprocess::preprocess(text, source);
    let tokens: Vec<String> = tokenizer::tokenize(&prepared)
        .into_iter()
        .filter(|t| !lexicon::is_ecommerce_chrome_token(&t.to_lowercase()))
        .collect();

    let mut phrases = Vec::new();
    for n in 1..=MAX_NGRAM {
        for window in tokenizer::word_ngrams(&tokens, n) {
            if let Some(rule) = filters::first_ngram_violation(window) {
                trace!(ngram = ?window, rule, "rejected n-gram");
                continue;
            }
            let phrase = tokenizer::normalize_phrase(window);
            if let Some(rule) = filters::first_phrase_violation(&phrase) {
                trace!(%phrase, rule, "rejected noise phrase");
                continue;
            }
            phrases.push(Candidate::new(phrase, source));
        }
    }
    phrases
}

/// Generate de-duplicated candidates for one page.
///
/// Fields are extracted in parallel but merged in the fixed field order, so
/// when the same phrase appears in several fields the earliest field keeps it.
pub fn generate(bundle: &ContentBundle, url: &str, include_css_topics: bool) -> Vec<Candidate> {
    let plan = field_plan(bundle, url, include_css_topics);
    let per_field: Vec<Vec<Candidate>> = plan.par_iter().map(FieldJob::extract).collect();

    let raw: usize = per_field.iter().map(Vec::len).sum();
    let mut seen: HashSet<String> = HashSet::new();
    let unique: Vec<Candidate> = per_field
        .into_iter()
        .flatten()
        .filter(|c| seen.insert(c.text.clone()))
        .collect();

    debug!(fields = plan.len(), raw, unique = unique.len(), "generated candidates");
    unique
}
