//! End-to-end extraction: generate → score → diversify → truncate, plus the
//! report envelope handed back to every surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algo::classify::{classify_page, PageType};
use crate::algo::{candidates, diversify, scoring};
use crate::bundle::{ContentBundle, PageInput, Source};
use crate::error::{Error, Result};

/// Error string used when the collaborator gave neither content nor a reason.
pub const FETCH_FAILED: &str = "fetch-failed";

fn default_top_k() -> usize {
    8
}

fn default_threshold() -> f64 {
    0.8
}

/// Tunables shared by the CLI, plugin and MCP surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractOptions {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Also mine semantic CSS class and id names.
    #[serde(default)]
    pub include_css_topics: bool,
    /// Jaccard similarity at or above which two topics are duplicates.
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            include_css_topics: false,
            similarity_threshold: default_threshold(),
        }
    }
}

impl ExtractOptions {
    pub fn validate(&self) -> Result<()> {
        let t = self.similarity_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(Error::InvalidOption(format!(
                "similarity_threshold must be within [0, 1], got {t}"
            )));
        }
        Ok(())
    }
}

/// One reported topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub text: String,
    /// Rounded to four decimal places.
    pub score: f64,
    pub sources: BTreeMap<Source, u32>,
}

impl From<scoring::ScoredTopic> for TopicEntry {
    fn from(t: scoring::ScoredTopic) -> Self {
        Self {
            text: t.text,
            score: round4(t.score),
            sources: t.sources,
        }
    }
}

/// The per-URL result. Success carries `page_type`; failure carries
/// `error` and `status_code` with an empty topic list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicReport {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub topics: Vec<TopicEntry>,
}

impl TopicReport {
    pub fn success(url: impl Into<String>, page_type: PageType, topics: Vec<TopicEntry>) -> Self {
        Self {
            url: url.into(),
            page_type: Some(page_type),
            error: None,
            status_code: None,
            topics,
        }
    }

    pub fn failure(url: impl Into<String>, error: Option<String>, status_code: Option<u16>) -> Self {
        Self {
            url: url.into(),
            page_type: None,
            error: Some(error.unwrap_or_else(|| FETCH_FAILED.to_string())),
            status_code: Some(status_code.unwrap_or(0)),
            topics: Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Ranked, de-duplicated topics for one page.
pub fn extract_topics(bundle: &ContentBundle, url: &str, opts: &ExtractOptions) -> TopicReport {
    let page_type = classify_page(bundle);
    let generated = candidates::generate(bundle, url, opts.include_css_topics);
    let scored = scoring::score(&generated);
    let kept = diversify::diversify(scored, opts.similarity_threshold);
    debug!(
        url,
        page_type = %page_type,
        candidates = generated.len(),
        kept = kept.len(),
        top_k = opts.top_k,
        "extracted topics"
    );
    let topics = kept
        .into_iter()
        .take(opts.top_k)
        .map(TopicEntry::from)
        .collect();
    TopicReport::success(url, page_type, topics)
}

/// Turn a collaborator's page document into a report. An upstream error or
/// missing content yields the failure envelope; an empty bundle is a
/// successful page with no topics.
pub fn run(input: &PageInput, opts: &ExtractOptions) -> Result<TopicReport> {
    opts.validate()?;
    match (&input.error, &input.content) {
        (None, Some(bundle)) => Ok(extract_topics(bundle, &input.url, opts)),
        (error, _) => {
            debug!(url = %input.url, ?error, status = ?input.status_code, "page unavailable");
            Ok(TopicReport::failure(
                input.url.clone(),
                error.clone(),
                input.status_code,
            ))
        }
    }
}
