use serde_json::Value;
use thiserror::Error;

/// Structural mismatch in a lockfile manifest.
///
/// Missing optional fields are never reported here; they take their
/// defaults. These errors mean a field exists but has the wrong JSON type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManifestShapeError {
    #[error("lockfile manifest must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("field 'lockfileVersion' must be an integer, found {found}")]
    InvalidLockfileVersion { found: &'static str },

    #[error("field '{field}' must be an object of dependency entries, found {found}")]
    InvalidDependencyTable {
        field: &'static str,
        found: &'static str,
    },

    #[error("dependency entry '{key}' must be an object, found {found}")]
    InvalidDependencyEntry { key: String, found: &'static str },
}

/// JSON type name used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(2)), "integer");
        assert_eq!(json_type_name(&json!(2.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn test_invalid_dependency_table_display() {
        let error = ManifestShapeError::InvalidDependencyTable {
            field: "packages",
            found: "array",
        };
        assert_eq!(
            error.to_string(),
            "field 'packages' must be an object of dependency entries, found array"
        );
    }
}
