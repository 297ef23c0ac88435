//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ClimadashError`] via `#[from]` or an explicit `From` impl.

/// Errors produced while enforcing domain invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A rolling buffer must hold at least one sample.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    /// The device base URL is empty.
    #[error("device base URL must not be empty")]
    EmptyBaseUrl,

    /// A reading carried NaN or an infinite value.
    #[error("reading values must be finite numbers")]
    NonFiniteReading,
}

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum ClimadashError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The device could not be reached or answered with an error status.
    #[error("device request failed")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device answered but the body could not be understood.
    #[error("malformed device payload")]
    Payload(#[source] Box<dyn std::error::Error + Send + Sync>),
}
