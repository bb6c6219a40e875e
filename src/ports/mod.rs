/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe what the application core needs from the
/// outside world; adapters provide the implementations.
pub mod outbound;
