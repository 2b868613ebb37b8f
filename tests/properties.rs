use nu_plugin_page_topics::algo::diversify::{canonical_form, diversify, jaccard, TITLE_OVERLAP};
use nu_plugin_page_topics::algo::stemmer::{PorterStemmer, Stemmer};
use nu_plugin_page_topics::algo::{candidates, lexicon, scoring};
use nu_plugin_page_topics::{extract_topics, ContentBundle, ExtractOptions};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "the", "a", "of", "and", "toaster", "oven", "ovens", "compact", "stainless", "bagel",
    "setting", "settings", "1800", "watts", "120", "volts", "cpt-122", "4-slice", "click",
    "here", "add", "cart", "engine", "analytical", "numbers", "bernoulli", "early", "life",
    "table", "contents", "edit", "12", "inch", "x", "7\"", "Amazon.com:", "Wikipedia",
];

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|w| w.join(" "))
}

fn phrases(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(phrase(), 0..max)
}

fn bundle() -> impl Strategy<Value = ContentBundle> {
    (phrase(), phrases(6), phrases(6), phrases(4), phrases(6), phrases(6)).prop_map(
        |(title, headings, paragraphs, specs, list_items, anchor_texts)| ContentBundle {
            title,
            headings,
            paragraphs,
            specs: specs.into_iter().map(|s| format!("Spec: {s}")).collect(),
            list_items,
            anchor_texts,
            ..Default::default()
        },
    )
}

fn url() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "https://example.com".to_string(),
        "https://www.amazon.com/Compact-Toaster/dp/B00".to_string(),
        "https://en.wikipedia.org/wiki/Toaster".to_string(),
        "example.com/toaster-ovens/compare".to_string(),
        String::new(),
    ])
}

proptest! {
    #[test]
    fn extraction_is_deterministic(b in bundle(), u in url()) {
        let opts = ExtractOptions::default();
        prop_assert_eq!(extract_topics(&b, &u, &opts), extract_topics(&b, &u, &opts));
    }

    #[test]
    fn no_stopword_only_candidates(b in bundle(), u in url()) {
        for c in candidates::generate(&b, &u, false) {
            prop_assert!(
                !c.text.split_whitespace().all(lexicon::is_stopword),
                "stopword-only candidate {:?}", c.text
            );
            let words = c.text.split_whitespace().count();
            prop_assert!((1..=3).contains(&words), "{:?} has {} words", c.text, words);
        }
    }

    #[test]
    fn candidates_are_unique(b in bundle(), u in url()) {
        let cands = candidates::generate(&b, &u, true);
        let mut texts: Vec<&str> = cands.iter().map(|c| c.text.as_str()).collect();
        let before = texts.len();
        texts.sort_unstable();
        texts.dedup();
        prop_assert_eq!(before, texts.len());
    }

    #[test]
    fn scores_non_increasing(b in bundle(), u in url()) {
        let scored = scoring::score(&candidates::generate(&b, &u, false));
        for pair in scored.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn diversified_topics_are_pairwise_distinct(
        b in bundle(),
        u in url(),
        threshold in 0.0f64..=1.0,
    ) {
        let kept = diversify(scoring::score(&candidates::generate(&b, &u, false)), threshold);
        for (i, x) in kept.iter().enumerate() {
            for y in kept.iter().skip(i + 1) {
                let (cx, cy) = (canonical_form(&x.text), canonical_form(&y.text));
                let sim = jaccard(&cx, &cy);
                prop_assert!(sim < threshold, "{:?} vs {:?}: {}", cx, cy, sim);
                prop_assert!(!cx.contains(cy.as_str()) && !cy.contains(cx.as_str()));
                if x.is_title_sourced() && y.is_title_sourced() {
                    prop_assert!(sim < TITLE_OVERLAP);
                }
            }
        }
    }

    #[test]
    fn top_k_bounds_output(b in bundle(), u in url(), k in 0usize..10) {
        let opts = ExtractOptions { top_k: k, ..Default::default() };
        prop_assert!(extract_topics(&b, &u, &opts).topics.len() <= k);
    }

    #[test]
    fn porter_never_grows_a_word(w in "[a-z]{0,12}") {
        let stem = PorterStemmer.stem(&w);
        prop_assert!(stem.len() <= w.len().max(1));
        prop_assert_eq!(PorterStemmer.stem(&w), stem);
    }
}
