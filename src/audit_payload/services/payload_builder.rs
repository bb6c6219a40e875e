use crate::audit_payload::domain::{
    normalize_dependency_key, AuditPayload, BuildSummary, DependencyAccumulator, DependencyEntry,
    LockfileManifest, ManifestShapeError,
};
use crate::audit_payload::policies::{NodeSkipPolicy, SkipPolicy};
use serde_json::Value;
use tracing::{debug, info};

/// PayloadBuilder - Turns a lockfile manifest into an npm audit payload
///
/// Holds only the injected skip policy, so one builder can serve any number
/// of manifests and accumulators.
pub struct PayloadBuilder<P> {
    skip_policy: P,
}

impl<P: SkipPolicy> PayloadBuilder<P> {
    pub fn new(skip_policy: P) -> Self {
        Self { skip_policy }
    }

    pub fn skip_policy(&self) -> &P {
        &self.skip_policy
    }

    /// Builds the audit payload for `manifest`
    ///
    /// Every accepted entry is appended to `accumulator` under its
    /// normalized name, then the payload is produced from the whole
    /// accumulator, including versions collected by earlier calls.
    ///
    /// # Arguments
    /// * `manifest` - Parsed `package-lock.json` document
    /// * `accumulator` - Caller-owned name -> versions map, never cleared
    /// * `skip_dev_dependencies` - Drop entries flagged `"dev": true`
    ///
    /// # Errors
    /// Returns a [`ManifestShapeError`] when a structural field has the
    /// wrong JSON type. The accumulator is left untouched in that case.
    pub fn build(
        &self,
        manifest: &Value,
        accumulator: &mut DependencyAccumulator,
        skip_dev_dependencies: bool,
    ) -> Result<AuditPayload, ManifestShapeError> {
        self.build_with_summary(manifest, accumulator, skip_dev_dependencies)
            .map(|(payload, _)| payload)
    }

    /// Same as [`build`](Self::build), also returning per-call counters.
    pub fn build_with_summary(
        &self,
        manifest: &Value,
        accumulator: &mut DependencyAccumulator,
        skip_dev_dependencies: bool,
    ) -> Result<(AuditPayload, BuildSummary), ManifestShapeError> {
        let manifest = LockfileManifest::new(manifest)?;
        let mut summary = BuildSummary::default();
        let mut accepted: Vec<(&str, &str)> = Vec::new();

        if let Some(table) = manifest.dependency_table()? {
            debug!(
                field = table.field(),
                entries = table.len(),
                "reading dependency table"
            );

            for (key, value) in table.iter() {
                let name = normalize_dependency_key(key);
                let entry = DependencyEntry::from_value(key, value)?;
                summary.entries_seen += 1;

                if skip_dev_dependencies && entry.is_dev() {
                    debug!(name, version = entry.version(), "skipping dev dependency");
                    self.skip_policy.observe_dev_skip(name, entry.version());
                    summary.skipped_dev += 1;
                    continue;
                }
                if self.skip_policy.should_skip(name, entry.version()) {
                    summary.skipped_by_policy += 1;
                    continue;
                }
                accepted.push((name, entry.version()));
            }
        }

        summary.accepted = accepted.len();
        for (name, version) in accepted {
            accumulator.put(name, version);
        }

        info!(
            accepted = summary.accepted,
            skipped = summary.skipped(),
            packages = accumulator.len(),
            "built audit payload"
        );

        Ok((AuditPayload::from_accumulator(accumulator), summary))
    }
}

impl Default for PayloadBuilder<NodeSkipPolicy> {
    fn default() -> Self {
        Self::new(NodeSkipPolicy::new())
    }
}
