use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algo::candidates::Candidate;
use crate::algo::stemmer::{PorterStemmer, Stemmer};
use crate::bundle::Source;

/// Model-number tokens (`cpt122`, `CPT122`) and "N-slice" tokens.
static MODEL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z]{2,}\d{2,}\b|\b\d{1,2}(?:-|\s)?slice\b").expect("model regex")
});
/// A number with a physical unit attached.
static UNIT_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?\s?(?:inch|in|w|v|watts|lbs?|pounds)\b").expect("unit regex")
});

pub const MODEL_BOOST: f64 = 1.35;
pub const UNIT_BOOST: f64 = 1.2;

/// One logical topic: every candidate sharing a canonical key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTopic {
    /// First-seen surface form for the canonical key.
    pub text: String,
    pub score: f64,
    /// source -> number of grouped candidates from that source
    pub sources: BTreeMap<Source, u32>,
}

impl ScoredTopic {
    pub fn is_title_sourced(&self) -> bool {
        self.sources.keys().any(|s| s.is_title_like())
    }

    pub fn occurrences(&self) -> u32 {
        self.sources.values().sum()
    }
}

/// Stem alphabetic tokens longer than two characters; keep everything else.
pub fn canonical_key(text: &str, stemmer: &dyn Stemmer) -> String {
    text.to_lowercase()
        .split_whitespace()
        .map(|t| {
            if t.len() > 2 && t.chars().all(|c| c.is_alphabetic()) {
                stemmer.stem(t)
            } else {
                t.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Favors two- and three-word phrases over single words.
pub fn length_boost(words: usize) -> f64 {
    match words {
        1 => 0.8,
        2 => 1.2,
        3 => 1.4,
        _ => 1.0,
    }
}

/// Multiplicative boosts for product-shaped phrases.
pub fn shape_boost(phrase: &str) -> f64 {
    let mut boost = 1.0;
    if MODEL_SHAPE.is_match(phrase) {
        boost *= MODEL_BOOST;
    }
    if UNIT_SHAPE.is_match(phrase) {
        boost *= UNIT_BOOST;
    }
    boost
}

/// Sum of provenance weight times occurrence count.
pub fn source_boost(sources: &BTreeMap<Source, u32>) -> f64 {
    sources
        .iter()
        .map(|(src, &count)| src.weight() * count as f64)
        .sum()
}

/// `tf × (1 + source boost) × length boost × shape boosts`
pub fn topic_score(tf: f64, sources: &BTreeMap<Source, u32>, phrase: &str) -> f64 {
    let words = phrase.split_whitespace().count().max(1);
    tf * (1.0 + source_boost(sources)) * length_boost(words) * shape_boost(phrase)
}

struct Group {
    display: String,
    count: u32,
    sources: BTreeMap<Source, u32>,
}

/// Groups candidates by canonical key and ranks the groups.
#[derive(Debug, Clone, Default)]
pub struct Scorer<S: Stemmer = PorterStemmer> {
    stemmer: S,
}

impl<S: Stemmer> Scorer<S> {
    pub fn new(stemmer: S) -> Self {
        Self { stemmer }
    }

    /// Score candidates, highest first. Equal scores keep first-seen order.
    pub fn score(&self, candidates: &[Candidate]) -> Vec<ScoredTopic> {
        let mut groups: Vec<Group> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for candidate in candidates {
            let key = canonical_key(&candidate.text, &self.stemmer);
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(Group {
                    display: candidate.text.clone(),
                    count: 0,
                    sources: BTreeMap::new(),
                });
                groups.len() - 1
            });
            let group = &mut groups[slot];
            group.count += 1;
            *group.sources.entry(candidate.source).or_insert(0) += 1;
        }

        let total = candidates.len().max(1) as f64;
        let mut scored: Vec<ScoredTopic> = groups
            .into_iter()
            .map(|g| {
                let tf = g.count as f64 / total;
                ScoredTopic {
                    score: topic_score(tf, &g.sources, &g.display),
                    text: g.display,
                    sources: g.sources,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        debug!(candidates = candidates.len(), topics = scored.len(), "scored topics");
        scored
    }
}

/// Score with the Porter stemmer.
pub fn score(candidates: &[Candidate]) -> Vec<ScoredTopic> {
    Scorer::<PorterStemmer>::default().score(candidates)
}
