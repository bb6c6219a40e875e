//! Audit payload domain: lockfile manifest views, version accumulation,
//! skip policies and the payload builder service.
pub mod domain;
pub mod policies;
pub mod services;
