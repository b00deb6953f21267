use serde::{Deserialize, Serialize};

/// A filter payload for one column
///
/// Committed filters are always `Values` (a possibly-empty ordered set).
/// Pending edits may also be `Text` (free-text columns forward raw input)
/// or `Json` (custom controls forward whatever shape their renderer emits;
/// the panel never interprets it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Values(Vec<String>),
    Text(String),
    Json(serde_json::Value),
}

impl FilterValue {
    /// The empty filter (matches everything)
    pub fn empty() -> Self {
        FilterValue::Values(Vec::new())
    }

    /// A single-element value set
    pub fn single(value: impl Into<String>) -> Self {
        FilterValue::Values(vec![value.into()])
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Values(v) => v.is_empty(),
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Json(j) => j.is_null(),
        }
    }

    /// The value set, or an empty slice for non-set payloads
    pub fn values(&self) -> &[String] {
        match self {
            FilterValue::Values(v) => v,
            _ => &[],
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values().iter().any(|v| v == value)
    }

    /// String coercion for display and for seeding text controls
    pub fn to_display_string(&self) -> String {
        match self {
            FilterValue::Values(v) => v.join(", "),
            FilterValue::Text(s) => s.clone(),
            FilterValue::Json(j) => j.to_string(),
        }
    }
}

impl Default for FilterValue {
    fn default() -> Self {
        FilterValue::empty()
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Values(values)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::single(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality_is_structural() {
        let a = FilterValue::Values(vec!["x".to_string(), "y".to_string()]);
        let b = FilterValue::Values(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(a, b);

        let c = FilterValue::Values(vec!["y".to_string(), "x".to_string()]);
        assert_ne!(a, c); // order matters, these are ordered sets
    }

    #[test]
    fn test_text_never_equals_values() {
        assert_ne!(
            FilterValue::Text("x".to_string()),
            FilterValue::single("x")
        );
    }

    #[test]
    fn test_display_coercion() {
        let v = FilterValue::Values(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(v.to_display_string(), "a, b");
        assert_eq!(FilterValue::Text("abc".to_string()).to_display_string(), "abc");
    }

    #[test]
    fn test_empty() {
        assert!(FilterValue::empty().is_empty());
        assert!(!FilterValue::single("a").is_empty());
    }
}
