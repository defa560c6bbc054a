//! Pulls the JSON object out of free-form model output.
//!
//! The whole text is tried first. Failing that, everything from the first `{`
//! to the last `}` is tried, which recovers objects wrapped in prose or
//! markdown fences. Prose that itself contains braces before the real object
//! defeats the heuristic; it is kept as-is on purpose, including merging
//! several `{...}` regions into one candidate.

use crate::errors::ServiceError;
use serde_json::{Map, Value};

const EXCERPT_CHARS: usize = 200;

pub fn parse_model_output(raw: &str) -> Result<Map<String, Value>, ServiceError> {
    let text = raw.trim();

    if let Some(object) = parse_object(text) {
        return Ok(object);
    }

    let embedded = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => parse_object(&text[start..=end]),
        _ => None,
    };

    embedded.ok_or_else(|| ServiceError::UnparseableResponse {
        excerpt: excerpt(text),
    })
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// First 200 characters of the trimmed model output followed by `...`, for
/// diagnostics.
pub fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}
