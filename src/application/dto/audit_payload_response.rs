use crate::audit_payload::domain::{AuditPayload, BuildSummary, DependencyAccumulator};

/// AuditPayloadResponse - Result of the payload use case
#[derive(Debug, Clone)]
pub struct AuditPayloadResponse {
    /// Payload ready to be sent to the audit API
    pub payload: AuditPayload,
    /// Every accepted name/version pair, for mapping audit results back
    pub accumulator: DependencyAccumulator,
    /// Counters aggregated over all lockfiles read
    pub summary: BuildSummary,
}

impl AuditPayloadResponse {
    pub fn new(
        payload: AuditPayload,
        accumulator: DependencyAccumulator,
        summary: BuildSummary,
    ) -> Self {
        Self {
            payload,
            accumulator,
            summary,
        }
    }
}
