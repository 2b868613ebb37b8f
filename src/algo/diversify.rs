//! Redundancy pruning over ranked topics.

use std::collections::HashSet;

use tracing::trace;

use crate::algo::scoring::ScoredTopic;

/// Jaccard floor for two title-sourced topics to count as duplicates.
pub const TITLE_OVERLAP: f64 = 0.5;

/// Lowercase, hyphens as spaces, whitespace collapsed.
pub fn canonical_form(text: &str) -> String {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Token-set Jaccard similarity of two canonical forms.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let sa: HashSet<&str> = a.split_whitespace().collect();
    let sb: HashSet<&str> = b.split_whitespace().collect();
    let union = sa.union(&sb).count();
    let inter = sa.intersection(&sb).count();
    inter as f64 / union.max(1) as f64
}

/// Why a topic was dropped against an already-accepted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redundancy {
    Overlap,
    Contained,
    TitleVariant,
}

struct Accepted {
    canonical: String,
    title_sourced: bool,
}

fn redundancy(
    canonical: &str,
    title_sourced: bool,
    kept: &Accepted,
    threshold: f64,
) -> Option<Redundancy> {
    let sim = jaccard(canonical, &kept.canonical);
    if sim >= threshold {
        return Some(Redundancy::Overlap);
    }
    if canonical.contains(kept.canonical.as_str()) || kept.canonical.contains(canonical) {
        return Some(Redundancy::Contained);
    }
    if title_sourced && kept.title_sourced && sim >= TITLE_OVERLAP {
        return Some(Redundancy::TitleVariant);
    }
    None
}

/// Greedy pass in rank order: keep a topic unless it duplicates, contains,
/// or is contained by a topic already kept.
pub fn diversify(topics: Vec<ScoredTopic>, threshold: f64) -> Vec<ScoredTopic> {
    let mut accepted: Vec<Accepted> = Vec::with_capacity(topics.len());
    let mut out = Vec::with_capacity(topics.len());

    for topic in topics {
        let canonical = canonical_form(&topic.text);
        let title_sourced = topic.is_title_sourced();
        let dropped = accepted
            .iter()
            .find_map(|kept| redundancy(&canonical, title_sourced, kept, threshold).map(|r| (r, kept)));
        if let Some((reason, kept)) = dropped {
            trace!(topic = %topic.text, against = %kept.canonical, ?reason, "dropped redundant topic");
            continue;
        }
        accepted.push(Accepted {
            canonical,
            title_sourced,
        });
        out.push(topic);
    }
    out
}
