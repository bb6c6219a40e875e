use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Raw lockfile text together with the file it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfileSource {
    pub path: PathBuf,
    pub content: String,
}

impl LockfileSource {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }
}

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to locate and
/// read the npm lockfile of a project directory.
pub trait LockfileReader {
    /// Reads the lockfile from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing the lockfile
    ///
    /// # Errors
    /// Returns an error if:
    /// - No lockfile exists in the directory
    /// - The file cannot be read due to permissions, I/O errors or security checks
    fn read_lockfile(&self, project_path: &Path) -> Result<LockfileSource>;
}
