use nu_plugin_page_topics::ops;
use nu_plugin_page_topics::pipeline::ExtractOptions;
use nu_plugin_page_topics::Error;
use serde_json::{json, Value};

fn extract(doc: Value) -> Value {
    ops::op_extract(&doc, &ExtractOptions::default()).unwrap()
}

fn topic_texts(report: &Value) -> Vec<String> {
    report["topics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap().to_string())
        .collect()
}

fn toaster_page() -> Value {
    json!({
        "url": "https://shop.example.com/toaster-ovens",
        "content": {
            "title": "Compact Stainless Toaster Oven",
            "headings": ["Bagel setting", "Customer reviews"],
            "paragraphs": ["A compact toaster oven with bagel and defrost settings."],
            "bullets": ["Fits a 12 inch pizza", "Toaster ovens heat faster than a full oven"],
            "specs": ["Wattage: 1800 watts", "Voltage: 120 volts"]
        }
    })
}

#[test]
fn scenario_marketplace_title_gets_model_boost() {
    let report = extract(json!({
        "url": "https://www.amazon.com/",
        "content": {"title": "Amazon.com: CPT-122 4-Slice Toaster: Kitchen & Dining"}
    }));
    let topics = report["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 1, "got {:?}", topic_texts(&report));
    assert_eq!(topics[0]["text"], "cpt-122 4-slice toaster");
    assert_eq!(topics[0]["sources"], json!({"title": 1}));
    // six title candidates; tf 1/6 × (1 + 2.5) × 1.4 × 1.35
    let score = topics[0]["score"].as_f64().unwrap();
    assert!((score - 1.1025).abs() < 1e-9, "score {score}");
}

#[test]
fn scenario_toc_heading_rejected() {
    let report = extract(json!({
        "url": "https://en.wikipedia.org/wiki/Ada_Lovelace",
        "content": {
            "title": "Ada Lovelace - Wikipedia",
            "headings": ["1.2 Early life", "Analytical Engine"]
        }
    }));
    let texts = topic_texts(&report);
    assert_eq!(texts[0], "ada lovelace");
    assert!(texts.contains(&"analytical engine".to_string()));
    assert!(texts.iter().all(|t| !t.contains("early") && !t.contains("life")));
    assert!(texts.iter().all(|t| !t.contains("wikipedia")));
}

#[test]
fn scenario_lone_stopword_rejected() {
    let report = extract(json!({
        "url": "https://example.com",
        "content": {"paragraphs": ["the"]}
    }));
    assert_eq!(report["topics"], json!([]));
}

#[test]
fn scenario_spec_row_gets_unit_boost() {
    let report = extract(json!({
        "url": "https://example.com",
        "content": {"specs": ["Wattage: 1800 watts"]}
    }));
    let topics = report["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 1, "got {:?}", topic_texts(&report));
    assert_eq!(topics[0]["text"], "1800 watts");
    assert_eq!(topics[0]["sources"], json!({"spec": 1}));
    // tf 1/2 × (1 + 1.2) × 1.2 × 1.2
    let score = topics[0]["score"].as_f64().unwrap();
    assert!((score - 1.584).abs() < 1e-9, "score {score}");
}

#[test]
fn scenario_empty_bundle() {
    let report = extract(json!({"url": "https://example.com", "content": {}}));
    assert_eq!(
        report,
        json!({"url": "https://example.com", "page_type": "other", "topics": []})
    );
}

#[test]
fn failure_envelope_for_upstream_error() {
    let report = extract(json!({
        "url": "https://example.com/missing",
        "error": "http-404",
        "status_code": 404
    }));
    assert_eq!(
        report,
        json!({
            "url": "https://example.com/missing",
            "error": "http-404",
            "status_code": 404,
            "topics": []
        })
    );
}

#[test]
fn failure_envelope_defaults() {
    let report = extract(json!({"url": "https://example.com", "content": null}));
    assert_eq!(report["error"], "fetch-failed");
    assert_eq!(report["status_code"], 0);
    assert!(report.get("page_type").is_none());
}

#[test]
fn bare_bundle_accepted() {
    let report = extract(json!({
        "url": "https://example.com",
        "title": "Compact Stainless Toaster Oven"
    }));
    assert_eq!(report["url"], "https://example.com");
    assert!(!report["topics"].as_array().unwrap().is_empty());
}

#[test]
fn topics_ranked_and_capped() {
    let report = extract(toaster_page());
    let topics = report["topics"].as_array().unwrap();
    assert!(!topics.is_empty());
    assert!(topics.len() <= 8);
    for pair in topics.windows(2) {
        assert!(pair[0]["score"].as_f64().unwrap() >= pair[1]["score"].as_f64().unwrap());
    }
}

#[test]
fn top_k_is_honored() {
    let opts = ExtractOptions {
        top_k: 2,
        ..Default::default()
    };
    let report = ops::op_extract(&toaster_page(), &opts).unwrap();
    assert_eq!(report["topics"].as_array().unwrap().len(), 2);

    let opts = ExtractOptions {
        top_k: 0,
        ..Default::default()
    };
    let report = ops::op_extract(&toaster_page(), &opts).unwrap();
    assert_eq!(report["topics"], json!([]));
}

#[test]
fn topics_not_contained_in_each_other() {
    let report = extract(toaster_page());
    let canon: Vec<String> = topic_texts(&report)
        .iter()
        .map(|t| t.replace('-', " "))
        .collect();
    for (i, a) in canon.iter().enumerate() {
        for (j, b) in canon.iter().enumerate() {
            if i != j {
                assert!(!a.contains(b.as_str()), "{a:?} contains {b:?}");
            }
        }
    }
}

#[test]
fn scores_have_four_decimals() {
    let report = extract(toaster_page());
    for t in report["topics"].as_array().unwrap() {
        let s = t["score"].as_f64().unwrap();
        assert!(((s * 10_000.0).round() - s * 10_000.0).abs() < 1e-6);
    }
}

#[test]
fn css_topics_opt_in() {
    let page = json!({
        "url": "https://example.com",
        "content": {"semantic_classes": ["productTitle"]}
    });
    let off = ops::op_extract(&page, &ExtractOptions::default()).unwrap();
    assert_eq!(off["topics"], json!([]));

    let opts = ExtractOptions {
        include_css_topics: true,
        ..Default::default()
    };
    let on = ops::op_extract(&page, &opts).unwrap();
    assert_eq!(topic_texts(&on), vec!["product title"]);
    assert_eq!(on["topics"][0]["sources"], json!({"css-class": 1}));
}

#[test]
fn array_input_keeps_order() {
    let docs = json!([
        toaster_page(),
        {"url": "https://example.com/down", "error": "timeout"},
        {"url": "https://example.com", "content": {}}
    ]);
    let out = extract(docs);
    let arr = out.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["url"], "https://shop.example.com/toaster-ovens");
    assert_eq!(arr[1]["error"], "timeout");
    assert_eq!(arr[2]["topics"], json!([]));
}

#[test]
fn deterministic() {
    assert_eq!(extract(toaster_page()), extract(toaster_page()));
}

#[test]
fn invalid_threshold_is_an_error() {
    let opts = ExtractOptions {
        similarity_threshold: -0.1,
        ..Default::default()
    };
    let err = ops::op_extract(&toaster_page(), &opts).unwrap_err();
    assert!(matches!(err, Error::InvalidOption(_)));
}

#[test]
fn non_object_document_is_an_error() {
    let err = ops::op_extract(&json!(42), &ExtractOptions::default()).unwrap_err();
    assert!(err.to_string().contains("number"));
}

#[test]
fn classify_product_and_missing_content() {
    let out = ops::op_classify(&json!([
        {"url": "https://a.example", "title": "Toaster - Add to Cart"},
        {"url": "https://b.example", "error": "timeout"}
    ]))
    .unwrap();
    assert_eq!(
        out,
        json!([
            {"url": "https://a.example", "page_type": "product"},
            {"url": "https://b.example", "page_type": "other"}
        ])
    );
}
