/// Use cases module containing application business logic orchestration
mod build_audit_payload;

pub use build_audit_payload::BuildAuditPayloadUseCase;
