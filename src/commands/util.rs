use nu_protocol::{LabeledError, PipelineData, Record, Span, Value};

use crate::error::Error;

/// Normalize any PipelineData into a Vec<Value> of page records.
///
/// Handles:
///   - Table (list of records) → pass through
///   - Single record → [record]
///   - Empty/Nothing → []
///   - Anything else → error, a page must be a record
pub fn normalize_input(input: PipelineData) -> Result<Vec<Value>, LabeledError> {
    let values: Vec<Value> = match input {
        PipelineData::Value(Value::List { vals, .. }, _) => vals,
        PipelineData::Value(Value::Nothing { .. }, _) => vec![],
        PipelineData::Value(value, _) => vec![value],
        other => other.into_iter().collect(),
    };
    if let Some(bad) = values.iter().find(|v| !matches!(v, Value::Record { .. })) {
        return Err(LabeledError::new(format!(
            "expected page records, got {}",
            bad.get_type()
        )));
    }
    Ok(values)
}

/// Convert a nu_protocol::Value to a serde_json::Value. Values without a JSON
/// counterpart (dates, durations, sizes) are carried as their string form.
pub fn nu_to_json(val: &Value) -> serde_json::Value {
    match val {
        Value::Nothing { .. } => serde_json::Value::Null,
        Value::Bool { val, .. } => serde_json::Value::Bool(*val),
        Value::Int { val, .. } => serde_json::Value::from(*val),
        Value::Float { val, .. } => serde_json::Number::from_f64(*val)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String { val, .. } => serde_json::Value::String(val.clone()),
        Value::List { vals, .. } => serde_json::Value::Array(vals.iter().map(nu_to_json).collect()),
        Value::Record { val, .. } => serde_json::Value::Object(
            val.iter()
                .map(|(k, v)| (k.clone(), nu_to_json(v)))
                .collect(),
        ),
        other => other
            .coerce_string()
            .map(serde_json::Value::String)
            .unwrap_or(serde_json::Value::Null),
    }
}

/// Convert a serde_json::Value to a nu_protocol::Value
pub fn json_to_nu(val: &serde_json::Value, span: Span) -> Value {
    match val {
        serde_json::Value::Null => Value::nothing(span),
        serde_json::Value::Bool(b) => Value::bool(*b, span),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::int(i, span)
            } else if let Some(f) = n.as_f64() {
                Value::float(f, span)
            } else {
                Value::string(n.to_string(), span)
            }
        }
        serde_json::Value::String(s) => Value::string(s, span),
        serde_json::Value::Array(arr) => {
            Value::list(arr.iter().map(|v| json_to_nu(v, span)).collect(), span)
        }
        serde_json::Value::Object(map) => {
            let mut record = Record::new();
            for (k, v) in map {
                record.push(k, json_to_nu(v, span));
            }
            Value::record(record, span)
        }
    }
}

/// Put a page URL given as a flag onto a record that lacks one.
pub fn with_url(row: &mut serde_json::Value, url: Option<&str>) {
    if let (Some(url), Some(obj)) = (url, row.as_object_mut()) {
        obj.entry("url")
            .or_insert_with(|| serde_json::Value::String(url.to_string()));
    }
}

pub fn labeled(e: Error) -> LabeledError {
    LabeledError::new(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trips_through_nu() {
        let doc = json!({
            "url": "https://example.com",
            "content": {"title": "Toaster", "headings": ["A", "B"]},
            "status_code": 200
        });
        let nu = json_to_nu(&doc, Span::test_data());
        assert_eq!(nu_to_json(&nu), doc);
    }

    #[test]
    fn flag_url_fills_missing_only() {
        let mut row = json!({"title": "Toaster"});
        with_url(&mut row, Some("https://a.example"));
        assert_eq!(row["url"], "https://a.example");
        let mut row = json!({"url": "https://b.example"});
        with_url(&mut row, Some("https://a.example"));
        assert_eq!(row["url"], "https://b.example");
    }

    #[test]
    fn strings_are_not_pages() {
        let input = PipelineData::Value(Value::test_string("hello"), None);
        assert!(normalize_input(input).is_err());
    }
}
