//! Shared operation wrappers for all interfaces (CLI, MCP, plugin).
//!
//! Each `op_*` function is a pure, synchronous wrapper around `pipeline` and
//! the `algo` modules. Input and output are `serde_json::Value`; nothing here
//! depends on rmcp, clap, or nu-plugin.

use rayon::prelude::*;
use serde_json::{json, Value};

use crate::algo::classify::classify_page;
use crate::bundle::{ContentBundle, PageInput};
use crate::error::{Error, Result};
use crate::pipeline::{self, ExtractOptions};

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Extract a text field from a JSON object, returning "" if missing.
pub fn get_text(row: &Value, field: &str) -> String {
    row.get(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Read one page document.
///
/// Accepts the full envelope `{url, content?, error?, status_code?}`, or a
/// bare content bundle with an optional `url` key alongside its fields.
pub fn parse_page_input(doc: &Value) -> Result<PageInput> {
    let Some(obj) = doc.as_object() else {
        return Err(Error::InvalidOption(format!(
            "expected a page object, got {}",
            json_kind(doc)
        )));
    };
    if obj.contains_key("content") || obj.contains_key("error") {
        return Ok(serde_json::from_value(doc.clone())?);
    }
    let content: ContentBundle = serde_json::from_value(doc.clone())?;
    Ok(PageInput {
        url: get_text(doc, "url"),
        content: Some(content),
        error: None,
        status_code: None,
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Apply `f` to one document, or to each element of an array in parallel
/// (order preserved).
fn per_document<F>(doc: &Value, f: F) -> Result<Value>
where
    F: Fn(&Value) -> Result<Value> + Sync,
{
    match doc {
        Value::Array(docs) => {
            let out: Result<Vec<Value>> = docs.par_iter().map(&f).collect();
            Ok(Value::Array(out?))
        }
        single => f(single),
    }
}

// ── Operations ──────────────────────────────────────────────────────────────

/// Topic report(s) for one page document or an array of them.
pub fn op_extract(doc: &Value, opts: &ExtractOptions) -> Result<Value> {
    opts.validate()?;
    per_document(doc, |d| {
        let input = parse_page_input(d)?;
        let report = pipeline::run(&input, opts)?;
        Ok(serde_json::to_value(report)?)
    })
}

/// `{url, page_type}` for one page document or an array of them. Documents
/// without content classify as `other`.
pub fn op_classify(doc: &Value) -> Result<Value> {
    per_document(doc, |d| {
        let input = parse_page_input(d)?;
        let page_type = input
            .content
            .as_ref()
            .map(classify_page)
            .unwrap_or_default();
        Ok(json!({ "url": input.url, "page_type": page_type }))
    })
}

/// Parse a JSON document from text and run [`op_extract`].
pub fn op_extract_str(text: &str, opts: &ExtractOptions) -> Result<Value> {
    let doc: Value = serde_json::from_str(text)?;
    op_extract(&doc, opts)
}
