use super::accumulator::DependencyAccumulator;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Request body for the npm audit API: package name -> versions in use.
///
/// Serializes as a JSON object whose values are arrays of version strings,
/// e.g. `{"lodash":["4.17.21","4.17.20"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditPayload(IndexMap<String, Vec<String>>);

impl AuditPayload {
    /// Snapshot of every name and version currently in `accumulator`.
    pub fn from_accumulator(accumulator: &DependencyAccumulator) -> Self {
        Self(
            accumulator
                .iter()
                .map(|(name, versions)| (name.to_string(), versions.to_vec()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn versions(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn to_json_value(&self) -> Value {
        let object: Map<String, Value> = self
            .0
            .iter()
            .map(|(name, versions)| {
                let versions = versions.iter().cloned().map(Value::String).collect();
                (name.clone(), Value::Array(versions))
            })
            .collect();
        Value::Object(object)
    }

    /// Renders the payload as JSON text.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(rendered)
    }
}
