use crate::application::dto::{AuditPayloadRequest, AuditPayloadResponse};
use crate::audit_payload::domain::{AuditPayload, BuildSummary, DependencyAccumulator};
use crate::audit_payload::policies::SkipPolicy;
use crate::audit_payload::services::PayloadBuilder;
use crate::ports::outbound::{LockfileReader, ProgressReporter};
use crate::shared::error::AuditError;
use crate::shared::Result;
use serde_json::Value;

/// BuildAuditPayloadUseCase - Core use case for audit payload generation
///
/// Reads the lockfile of each requested project, parses it and feeds it
/// through the payload builder with one shared accumulator.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PR` - ProgressReporter implementation
/// * `P` - SkipPolicy implementation
pub struct BuildAuditPayloadUseCase<LR, PR, P> {
    lockfile_reader: LR,
    progress_reporter: PR,
    payload_builder: PayloadBuilder<P>,
}

impl<LR, PR, P> BuildAuditPayloadUseCase<LR, PR, P>
where
    LR: LockfileReader,
    PR: ProgressReporter,
    P: SkipPolicy,
{
    /// Creates a new BuildAuditPayloadUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, progress_reporter: PR, skip_policy: P) -> Self {
        Self {
            lockfile_reader,
            progress_reporter,
            payload_builder: PayloadBuilder::new(skip_policy),
        }
    }

    pub fn skip_policy(&self) -> &P {
        self.payload_builder.skip_policy()
    }

    /// Executes the use case with a fresh accumulator
    pub fn execute(&self, request: AuditPayloadRequest) -> Result<AuditPayloadResponse> {
        let mut accumulator = DependencyAccumulator::new();
        let (payload, summary) = self.execute_with_accumulator(request, &mut accumulator)?;
        Ok(AuditPayloadResponse::new(payload, accumulator, summary))
    }

    /// Executes the use case, adding to a caller-owned accumulator
    ///
    /// The returned payload covers everything in `accumulator`, including
    /// entries collected before this call.
    pub fn execute_with_accumulator(
        &self,
        request: AuditPayloadRequest,
        accumulator: &mut DependencyAccumulator,
    ) -> Result<(AuditPayload, BuildSummary)> {
        if request.project_paths.is_empty() {
            return Err(AuditError::Validation {
                message: "At least one project path is required".to_string(),
            }
            .into());
        }

        let mut payload = AuditPayload::from_accumulator(accumulator);
        let mut total = BuildSummary::default();

        for project_path in &request.project_paths {
            self.progress_reporter.report(&format!(
                "📖 Loading lockfile from: {}",
                project_path.display()
            ));

            let source = self.lockfile_reader.read_lockfile(project_path)?;

            let manifest: Value =
                serde_json::from_str(&source.content).map_err(|e| {
                    AuditError::LockfileParseError {
                        path: source.path.clone(),
                        details: e.to_string(),
                    }
                })?;

            let (built, summary) = self
                .payload_builder
                .build_with_summary(&manifest, accumulator, request.skip_dev_dependencies)
                .map_err(|e| AuditError::InvalidManifest {
                    path: source.path.clone(),
                    source: e,
                })?;

            self.report_summary(&summary);
            payload = built;
            total += summary;
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Audit payload ready: {} package(s), {} version(s)",
            payload.len(),
            accumulator.version_count()
        ));

        Ok((payload, total))
    }

    fn report_summary(&self, summary: &BuildSummary) {
        self.progress_reporter.report(&format!(
            "✅ Accepted {} of {} dependency entries",
            summary.accepted, summary.entries_seen
        ));
        if summary.skipped_dev > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} dev dependency entries",
                summary.skipped_dev
            ));
        }
        if summary.skipped_by_policy > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} local or excluded entries",
                summary.skipped_by_policy
            ));
        }
    }
}
