use super::error::{json_type_name, ManifestShapeError};
use serde_json::Value;

const VERSION_FIELD: &str = "version";
const DEV_FIELD: &str = "dev";

/// View over a single dependency entry of a lockfile.
///
/// `version` defaults to `""` and `dev` to `false` when missing or not of
/// the expected scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEntry<'a> {
    version: &'a str,
    dev: bool,
}

impl<'a> DependencyEntry<'a> {
    /// Reads an entry; `key` is the raw lockfile key, used for error reporting.
    ///
    /// # Errors
    /// Returns `InvalidDependencyEntry` if the value is not a JSON object.
    pub fn from_value(key: &str, value: &'a Value) -> Result<Self, ManifestShapeError> {
        let object = value
            .as_object()
            .ok_or_else(|| ManifestShapeError::InvalidDependencyEntry {
                key: key.to_string(),
                found: json_type_name(value),
            })?;

        Ok(Self {
            version: object
                .get(VERSION_FIELD)
                .and_then(Value::as_str)
                .unwrap_or(""),
            dev: object.get(DEV_FIELD).and_then(Value::as_bool).unwrap_or(false),
        })
    }

    pub fn version(&self) -> &'a str {
        self.version
    }

    pub fn is_dev(&self) -> bool {
        self.dev
    }
}
