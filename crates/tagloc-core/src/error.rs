#![forbid(unsafe_code)]

//! Errors for the few fallible surfaces of the engine.
//!
//! Resolution itself never fails; only loading configuration can.

/// Failure loading or validating a [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Values that parsed but make no sense.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
