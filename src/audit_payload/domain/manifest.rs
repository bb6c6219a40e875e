use super::error::{json_type_name, ManifestShapeError};
use serde_json::{Map, Value};

/// Lockfile version assumed when `lockfileVersion` is absent.
pub const DEFAULT_LOCKFILE_VERSION: i64 = 1;

const LOCKFILE_VERSION_FIELD: &str = "lockfileVersion";
const DEPENDENCIES_FIELD: &str = "dependencies";
const PACKAGES_FIELD: &str = "packages";

/// Borrowing view over a parsed `package-lock.json` / `npm-shrinkwrap.json`.
#[derive(Debug, Clone, Copy)]
pub struct LockfileManifest<'a> {
    root: &'a Map<String, Value>,
}

impl<'a> LockfileManifest<'a> {
    /// # Errors
    /// Returns `NotAnObject` if the document root is not a JSON object.
    pub fn new(document: &'a Value) -> Result<Self, ManifestShapeError> {
        let root = document
            .as_object()
            .ok_or_else(|| ManifestShapeError::NotAnObject {
                found: json_type_name(document),
            })?;
        Ok(Self { root })
    }

    /// Schema version from `lockfileVersion`, or [`DEFAULT_LOCKFILE_VERSION`].
    pub fn lockfile_version(&self) -> Result<i64, ManifestShapeError> {
        match self.root.get(LOCKFILE_VERSION_FIELD) {
            None => Ok(DEFAULT_LOCKFILE_VERSION),
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                Ok(n.as_i64().unwrap_or(i64::MAX))
            }
            Some(other) => Err(ManifestShapeError::InvalidLockfileVersion {
                found: json_type_name(other),
            }),
        }
    }

    /// Selects the table holding dependency entries.
    ///
    /// `dependencies` wins whenever it is present. Lockfiles of version 2 and
    /// later may omit it, in which case `packages` is used. `Ok(None)` means
    /// the manifest has no dependency table at all.
    pub fn dependency_table(&self) -> Result<Option<DependencyTable<'a>>, ManifestShapeError> {
        let version = self.lockfile_version()?;

        if let Some(table) = self.table(DEPENDENCIES_FIELD)? {
            return Ok(Some(table));
        }
        if version >= 2 {
            return self.table(PACKAGES_FIELD);
        }
        Ok(None)
    }

    fn table(&self, field: &'static str) -> Result<Option<DependencyTable<'a>>, ManifestShapeError> {
        match self.root.get(field) {
            None => Ok(None),
            Some(Value::Object(entries)) => Ok(Some(DependencyTable { field, entries })),
            Some(other) => Err(ManifestShapeError::InvalidDependencyTable {
                field,
                found: json_type_name(other),
            }),
        }
    }
}

/// The `dependencies` or `packages` object of a manifest.
#[derive(Debug, Clone, Copy)]
pub struct DependencyTable<'a> {
    field: &'static str,
    entries: &'a Map<String, Value>,
}

impl<'a> DependencyTable<'a> {
    /// Name of the manifest field this table was read from.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw keys and entry values in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}
