//! Structured-output parsing for model responses.
//!
//! Models occasionally wrap the requested JSON in Markdown fences or add a
//! sentence before it, so parsing tries the raw text first and then falls
//! back to the outermost brace span and fenced blocks.

use serde_json::Value;

use vitalrisk_core::models::insight::Insight;

use crate::error::BedrockError;

/// Parse an [`Insight`] out of raw model text.
pub fn parse_insight(text: &str) -> Result<Insight, BedrockError> {
    let value = extract_json(text)?;
    serde_json::from_value(value).map_err(|e| {
        BedrockError::SchemaViolation(format!("failed to parse Insight: {e}. Response: {text}"))
    })
}

/// Locate the first JSON value embedded in `text`.
pub fn extract_json(text: &str) -> Result<Value, BedrockError> {
    let t = text.trim().trim_matches('\u{feff}');

    if let Ok(v) = serde_json::from_str::<Value>(t) {
        return Ok(v);
    }

    if let (Some(i), Some(j)) = (t.find('{'), t.rfind('}'))
        && i < j
        && let Ok(v) = serde_json::from_str::<Value>(&t[i..=j])
    {
        return Ok(v);
    }

    for fence in ["```json", "```"] {
        if let Some(start) = t.find(fence) {
            let body = &t[start + fence.len()..];
            if let Some(end) = body.find("```")
                && let Ok(v) = serde_json::from_str::<Value>(&body[..end])
            {
                return Ok(v);
            }
        }
    }

    Err(BedrockError::ResponseParse(
        "no valid JSON found in model output".to_string(),
    ))
}
