/// Result alias with anyhow::Error, used across the application and adapter layers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
