use crate::ports::outbound::{LockfileReader, LockfileSource};
use crate::shared::error::AuditError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Lockfile names in the order npm honours them.
const LOCKFILE_CANDIDATES: [&str; 2] = ["npm-shrinkwrap.json", "package-lock.json"];

/// FileSystemReader adapter for reading npm lockfiles from disk
///
/// `npm-shrinkwrap.json` takes precedence over `package-lock.json`
/// when both exist, matching npm's own resolution.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path).map_err(|e| AuditError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| AuditError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(content)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<LockfileSource> {
        let lockfile_path = LOCKFILE_CANDIDATES
            .iter()
            .map(|name| project_path.join(name))
            .find(|path| path.exists())
            .ok_or_else(|| AuditError::LockfileNotFound {
                path: project_path.join("package-lock.json"),
                suggestion: format!(
                    "Neither npm-shrinkwrap.json nor package-lock.json exists in project directory \"{}\".\n   \
                     Run `npm install --package-lock-only` there, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            })?;

        debug!(path = %lockfile_path.display(), "reading lockfile");

        let file_type = lockfile_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "lockfile".to_string());
        let content = self.safe_read_file(&lockfile_path, &file_type)?;

        Ok(LockfileSource::new(lockfile_path, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_package_lock_success() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("package-lock.json");
        fs::write(&lockfile_path, r#"{"lockfileVersion":3}"#).unwrap();

        let reader = FileSystemReader::new();
        let source = reader.read_lockfile(temp_dir.path()).unwrap();

        assert_eq!(source.content, r#"{"lockfileVersion":3}"#);
        assert_eq!(source.path, lockfile_path);
    }

    #[test]
    fn test_shrinkwrap_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package-lock.json"), "lock").unwrap();
        fs::write(temp_dir.path().join("npm-shrinkwrap.json"), "shrinkwrap").unwrap();

        let reader = FileSystemReader::new();
        let source = reader.read_lockfile(temp_dir.path()).unwrap();

        assert_eq!(source.content, "shrinkwrap");
        assert!(source.path.ends_with("npm-shrinkwrap.json"));
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Lockfile not found"));
        assert!(err_string.contains("npm install --package-lock-only"));
    }

    #[test]
    fn test_lockfile_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("package-lock.json")).unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_lockfile_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("package-lock.json")).unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Security violation"));
    }
}
