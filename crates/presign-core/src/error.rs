//! Error types for presigned URL generation.
//!
//! Failures fall into two classes that callers must be able to distinguish:
//! bad request input (the caller can fix and retry) and missing server-side
//! configuration (retrying cannot succeed until the deployment is fixed).

/// Errors that can occur while generating a presigned URL.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// The caller supplied an invalid request (empty object key, bad expiry).
    ///
    /// Maps to a 400-class response at the HTTP boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required credential or location value is absent from the signer
    /// configuration. This is an operator misconfiguration, not a caller
    /// error.
    ///
    /// Maps to a 500-class response at the HTTP boundary. The variant names
    /// the missing field; it never carries secret material.
    #[error("Missing server configuration: {0}")]
    MissingConfig(String),
}

impl SignError {
    /// Create an [`SignError::InvalidInput`] from any displayable message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether this error is an operator misconfiguration rather than a
    /// caller mistake.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingConfig(_))
    }
}
