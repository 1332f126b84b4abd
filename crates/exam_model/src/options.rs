//! Option list normalization
//!
//! Options arrive as a JSON list, as a string holding a JSON-encoded list,
//! or as a comma-separated string. All of them collapse to `Vec<String>`.

use serde_json::Value;

/// Normalize a raw options value into a list of option strings
pub fn normalize_options(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items.iter().map(option_text).collect(),
        Value::String(s) => normalize_option_string(s),
        Value::Null => Vec::new(),
        other => normalize_option_string(&other.to_string()),
    }
}

/// Normalize an options string: JSON array first, comma-separated otherwise
pub fn normalize_option_string(raw: &str) -> Vec<String> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        return items.iter().map(option_text).collect();
    }

    if raw.trim().is_empty() {
        return Vec::new();
    }
    // Empty pieces keep their slot so letters and indices stay aligned
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}

fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_three_shapes_agree() {
        let expected = vec!["A".to_string(), "B".to_string()];
        assert_eq!(normalize_options(&json!(["A", "B"])), expected);
        assert_eq!(normalize_options(&json!("[\"A\",\"B\"]")), expected);
        assert_eq!(normalize_options(&json!("A, B")), expected);
    }

    #[test]
    fn test_null_is_empty() {
        assert!(normalize_options(&Value::Null).is_empty());
        assert!(normalize_options(&json!("")).is_empty());
        assert!(normalize_options(&json!("  ")).is_empty());
    }

    #[test]
    fn test_empty_pieces_keep_their_slot() {
        assert_eq!(normalize_options(&json!("Red,,Blue")), vec!["Red", "", "Blue"]);
        assert_eq!(normalize_options(&json!("Red, Blue,")), vec!["Red", "Blue", ""]);
    }

    #[test]
    fn test_non_string_elements() {
        assert_eq!(normalize_options(&json!([1, 2.5, true])), vec!["1", "2.5", "true"]);
    }

    #[test]
    fn test_json_object_string_falls_back_to_commas() {
        assert_eq!(normalize_option_string("{\"a\":1}"), vec!["{\"a\":1}"]);
    }

    #[test]
    fn test_malformed_json_list_splits_on_commas() {
        assert_eq!(normalize_option_string("[\"A\", \"B\""), vec!["[\"A\"", "\"B\""]);
    }
}
