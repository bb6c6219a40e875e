/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_payload_request;
mod audit_payload_response;

pub use audit_payload_request::AuditPayloadRequest;
pub use audit_payload_response::AuditPayloadResponse;
