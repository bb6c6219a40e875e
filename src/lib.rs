//! npm-audit-payload - build npm audit API payloads from npm lockfiles
//!
//! Reads `package-lock.json` (or `npm-shrinkwrap.json`), collects the
//! version of every installed package and renders the
//! `{"name": ["version", ...]}` document the npm audit API expects.
//!
//! # Architecture
//!
//! - **Domain Layer** (`audit_payload`): manifest views, accumulator, payload, skip policies and the builder
//! - **Application Layer** (`application`): use case and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```
//! use npm_audit_payload::prelude::*;
//! use serde_json::json;
//!
//! let manifest = json!({
//!     "lockfileVersion": 1,
//!     "dependencies": {
//!         "lodash": {"version": "4.17.21"},
//!         "node_modules/lodash": {"version": "4.17.20"}
//!     }
//! });
//!
//! let builder = PayloadBuilder::new(NodeSkipPolicy::new());
//! let mut accumulator = DependencyAccumulator::new();
//! let payload = builder.build(&manifest, &mut accumulator, false).unwrap();
//!
//! assert_eq!(
//!     payload.to_json_string(false).unwrap(),
//!     r#"{"lodash":["4.17.21","4.17.20"]}"#
//! );
//! ```

pub mod adapters;
pub mod application;
pub mod audit_payload;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{AuditPayloadRequest, AuditPayloadResponse};
    pub use crate::application::use_cases::BuildAuditPayloadUseCase;
    pub use crate::audit_payload::domain::{
        normalize_dependency_key, AuditPayload, BuildSummary, DependencyAccumulator,
        ManifestShapeError, NODE_MODULES_DIRNAME,
    };
    pub use crate::audit_payload::policies::{NodeSkipPolicy, PackageFilter, SkipPolicy};
    pub use crate::audit_payload::services::PayloadBuilder;
    pub use crate::ports::outbound::{
        LockfileReader, LockfileSource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{AuditError, ExitCode};
    pub use crate::shared::Result;
}
