mod cli;

use cli::Args;
use npm_audit_payload::adapters::outbound::console::StderrProgressReporter;
use npm_audit_payload::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use npm_audit_payload::application::dto::AuditPayloadRequest;
use npm_audit_payload::application::use_cases::BuildAuditPayloadUseCase;
use npm_audit_payload::audit_payload::policies::{NodeSkipPolicy, PackageFilter};
use npm_audit_payload::config::{discover_config, load_config_from_path};
use npm_audit_payload::ports::outbound::{OutputPresenter, ProgressReporter};
use npm_audit_payload::shared::error::{AuditError, ExitCode};
use npm_audit_payload::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostic logging goes to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let project_paths = args.project_paths();
    for project_path in &project_paths {
        validate_project_path(project_path)?;
    }

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(&project_paths[0])?,
    };
    let options = args.resolve(config);

    let skip_policy = if options.exclude_patterns.is_empty() {
        NodeSkipPolicy::new()
    } else {
        NodeSkipPolicy::with_exclusions(PackageFilter::new(options.exclude_patterns)?)
    };
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Create use case with injected dependencies
    let use_case =
        BuildAuditPayloadUseCase::new(FileSystemReader::new(), progress_reporter, skip_policy);

    let request = AuditPayloadRequest::new(project_paths, options.skip_dev_dependencies);
    let response = use_case.execute(request)?;

    if let Some(exclusions) = use_case.skip_policy().exclusions() {
        let warnings = StderrProgressReporter::quiet();
        for pattern in exclusions.unmatched_patterns() {
            warnings.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }
    }

    let rendered = response.payload.to_json_string(!options.compact)?;

    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::with_reporter(
            PathBuf::from(output_path),
            progress_reporter,
        )),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&rendered)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| AuditError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_project_path(temp_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let result = validate_project_path(&nonexistent_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package-lock.json");
        fs::write(&file_path, "{}").unwrap();

        let result = validate_project_path(&file_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_project_path_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real");
        let link = temp_dir.path().join("link");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_project_path(&link);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }
}
