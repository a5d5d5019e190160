//! Safe navigation over untyped JSON objects
//!
//! Live objects are handled as `serde_json::Value` trees. Every step of a
//! lookup returns an `Option`, so a missing or differently shaped field never
//! panics; it simply yields `None`.

use serde_json::Value;

/// Path lookups over a JSON value
pub trait ValuePath {
    /// Follow object keys in order
    fn at(&self, path: &[&str]) -> Option<&Value>;

    /// String at the path, if present and a string
    fn str_at(&self, path: &[&str]) -> Option<&str> {
        self.at(path).and_then(Value::as_str)
    }

    /// Array at the path, if present and an array
    fn array_at(&self, path: &[&str]) -> Option<&Vec<Value>> {
        self.at(path).and_then(Value::as_array)
    }
}

impl ValuePath for Value {
    fn at(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(self, |value, key| value.get(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let obj = json!({"status": {"phase": "Running"}});
        assert_eq!(obj.str_at(&["status", "phase"]), Some("Running"));
        assert_eq!(obj.at(&[]), Some(&obj));
    }

    #[test]
    fn test_missing_or_mistyped_fields() {
        let obj = json!({"status": "oops", "spec": {"requests": 3}});
        assert_eq!(obj.str_at(&["status", "phase"]), None);
        assert_eq!(obj.array_at(&["spec", "requests"]), None);
        assert_eq!(obj.str_at(&["metadata", "name"]), None);
        assert_eq!(Value::Null.at(&["anything"]), None);
    }

    #[test]
    fn test_array_lookup() {
        let obj = json!({"status": {"conditions": [{"type": "Ready"}]}});
        assert_eq!(obj.array_at(&["status", "conditions"]).map(Vec::len), Some(1));
    }
}
