//! Extraction of the JSON payload from raw model output.

use serde_json::Value;

use crate::error::ExtractError;

/// Extract a JSON object from raw model text.
///
/// Tolerates common model formatting noise: markdown code fences (with or
/// without a language tag) and leading/trailing prose. Fence markers are
/// stripped, then the text is sliced to the outermost brace pair before a
/// strict parse. Anything that still fails to parse is a
/// `MalformedResponse` and the designed trigger for fallback synthesis;
/// no lenient repair is attempted beyond this.
pub fn extract_json(raw: &str) -> Result<Value, ExtractError> {
    let cleaned = raw.trim().replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let candidate = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => &cleaned[start..=end],
        _ => cleaned,
    };

    serde_json::from_str(candidate).map_err(|e| ExtractError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_plain_json() {
        let parsed = extract_json(r#"{"recipes": []}"#).unwrap();
        assert_eq!(parsed, json!({"recipes": []}));
    }

    #[test]
    fn test_extract_fenced_json_with_prose() {
        let raw = "Here are your recipes!\n```json\n{\"recipes\": [{\"title\": \"Soup\"}]}\n```\nEnjoy!";
        let parsed = extract_json(raw).unwrap();
        assert_eq!(parsed, json!({"recipes": [{"title": "Soup"}]}));
    }

    #[test]
    fn test_fenced_equals_unwrapped() {
        let bare = r#"{"recipes": [{"title": "Stew", "cuisine": "French"}]}"#;
        let fenced = format!("Sure thing:\n```json\n{}\n```", bare);
        assert_eq!(extract_json(bare).unwrap(), extract_json(&fenced).unwrap());
    }

    #[test]
    fn test_extract_fence_without_language_tag() {
        let raw = "```\n{\"recipes\": []}\n```";
        let parsed = extract_json(raw).unwrap();
        assert_eq!(parsed, json!({"recipes": []}));
    }

    #[test]
    fn test_extract_slices_to_outer_braces() {
        let raw = "The model says: {\"recipes\": [{\"title\": \"Pie\"}]} -- end of output";
        let parsed = extract_json(raw).unwrap();
        assert_eq!(parsed["recipes"][0]["title"], "Pie");
    }

    #[test]
    fn test_extract_rejects_garbage() {
        let result = extract_json("I'm sorry, I can't produce JSON today.");
        assert!(matches!(result, Err(ExtractError::MalformedResponse(_))));
    }

    #[test]
    fn test_extract_rejects_truncated_json() {
        let result = extract_json(r#"{"recipes": [{"title": "Unfini"#);
        assert!(matches!(result, Err(ExtractError::MalformedResponse(_))));
    }
}
