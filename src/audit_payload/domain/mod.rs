pub mod accumulator;
pub mod build_summary;
pub mod dependency_entry;
pub mod dependency_key;
pub mod error;
pub mod manifest;
pub mod payload;

pub use accumulator::DependencyAccumulator;
pub use build_summary::BuildSummary;
pub use dependency_entry::DependencyEntry;
pub use dependency_key::{normalize_dependency_key, NODE_MODULES_DIRNAME};
pub use error::ManifestShapeError;
pub use manifest::{DependencyTable, LockfileManifest, DEFAULT_LOCKFILE_VERSION};
pub use payload::AuditPayload;
