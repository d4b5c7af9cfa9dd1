//! Parsing of untrusted model output into a structured answer
//!
//! The model's response is external text and is only ever parsed with
//! serde_json under the fixed schema; no part of it is evaluated or
//! interpreted. Any response that does not contain a usable JSON object
//! degrades to the sentinel answer instead of surfacing an error.

use serde_json::Value;

use crate::types::StructuredAnswer;

/// Parse the model's raw text into a `StructuredAnswer`.
///
/// The first brace-balanced slice that parses as a JSON object is used. A
/// response with no parseable object, or an object missing any schema field,
/// yields the exact sentinel. Present fields of the wrong type are coerced
/// where safe (numbers and bools to strings, numeric strings to `page`);
/// uncoercible fields fall back to the sentinel's value for that field.
pub fn parse_structured_answer(raw: &str) -> StructuredAnswer {
    let Some(map) = extract_json_object(raw) else {
        tracing::warn!("model output contained no parseable JSON object");
        return StructuredAnswer::sentinel();
    };

    let (Some(answer), Some(clause), Some(section), Some(page), Some(rationale)) = (
        map.get("answer"),
        map.get("clause"),
        map.get("section"),
        map.get("page"),
        map.get("rationale"),
    ) else {
        tracing::warn!("model output is missing required answer fields");
        return StructuredAnswer::sentinel();
    };

    StructuredAnswer {
        answer: coerce_string(answer, StructuredAnswer::SENTINEL_ANSWER),
        clause: coerce_string(clause, ""),
        section: coerce_string(section, ""),
        page: coerce_page(page),
        rationale: coerce_string(rationale, StructuredAnswer::SENTINEL_RATIONALE),
    }
}

/// Find the first `{` whose balanced `{ ... }` slice parses as a JSON
/// object. Models often wrap the object in prose or code fences, and the
/// prose itself can contain braces, so each `{` start is tried in turn until
/// one parses or the text runs out.
fn extract_json_object(raw: &str) -> Option<serde_json::Map<String, Value>> {
    let mut rest = raw;
    while let Some(start) = rest.find('{') {
        rest = &rest[start..];
        if let Some(candidate) = balanced_braces(rest) {
            if let Ok(Value::Object(map)) = serde_json::from_str(candidate) {
                return Some(map);
            }
        }
        rest = &rest[1..];
    }
    None
}

/// Slice out the balanced `{ ... }` prefix of `raw` (which must start with
/// `{`), skipping braces inside JSON string literals
fn balanced_braces(raw: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[..offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

fn coerce_string(value: &Value, fallback: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => fallback.to_string(),
    }
}

fn coerce_page(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or(-1),
        Value::String(s) => s.trim().parse().unwrap_or(-1),
        _ => -1,
    }
}
