//! Frontend Models
//!
//! Data structures matching the BFHL endpoint's response shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single response field value.
///
/// The endpoint returns a flat object whose values are booleans (`is_success`),
/// strings (`user_id`, `email`, `roll_number`) or string arrays (`numbers`,
/// `alphabets`, `highest_alphabet`). No fixed key set is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Indented JSON text form used for display
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Response payload: an open mapping keyed by field name.
///
/// Keys keep the order they appear in the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BfhlResponse {
    pub fields: IndexMap<String, FieldValue>,
}

impl BfhlResponse {
    /// Field names in received order
    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    /// The `(key, value)` pairs for exactly the selected keys that exist in
    /// the payload, in selected order
    pub fn visible_fields(&self, selected: &[String]) -> Vec<(String, FieldValue)> {
        selected
            .iter()
            .filter_map(|key| self.fields.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BfhlResponse {
        serde_json::from_str(
            r#"{
                "is_success": true,
                "user_id": "john_doe_17091999",
                "numbers": ["1"],
                "alphabets": ["A", "B"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_keys_preserve_received_order() {
        let resp: BfhlResponse =
            serde_json::from_str(r#"{"is_success": true, "numbers": ["1", "2"]}"#).unwrap();
        assert_eq!(resp.keys(), vec!["is_success", "numbers"]);
    }

    #[test]
    fn test_field_value_kinds() {
        let resp = sample();
        assert_eq!(resp.fields["is_success"], FieldValue::Flag(true));
        assert_eq!(
            resp.fields["user_id"],
            FieldValue::Text("john_doe_17091999".to_string())
        );
        assert_eq!(
            resp.fields["alphabets"],
            FieldValue::List(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_visible_fields_follow_selection_order() {
        let resp = sample();
        let selected = vec!["numbers".to_string(), "is_success".to_string()];
        let visible = resp.visible_fields(&selected);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].0, "numbers");
        assert_eq!(visible[1].0, "is_success");
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let resp = sample();
        let first = resp.visible_fields(&["numbers".to_string(), "alphabets".to_string()]);
        assert_eq!(first.len(), 2);

        let second = resp.visible_fields(&["is_success".to_string()]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].0, "is_success");
    }

    #[test]
    fn test_visible_fields_skip_unknown_keys() {
        let resp = sample();
        let visible = resp.visible_fields(&["missing".to_string(), "numbers".to_string()]);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, "numbers");
    }

    #[test]
    fn test_empty_selection_shows_nothing() {
        let resp = sample();
        assert!(resp.visible_fields(&[]).is_empty());
    }

    #[test]
    fn test_pretty_is_indented_json() {
        let value = FieldValue::List(vec!["A".to_string(), "1".to_string()]);
        assert_eq!(value.pretty(), "[\n  \"A\",\n  \"1\"\n]");
        assert_eq!(FieldValue::Flag(true).pretty(), "true");
    }
}
