//! phpIPAM client errors

use thiserror::Error;

use crate::codec::TypeMismatch;

/// Errors that can occur when interacting with the phpIPAM API
#[derive(Debug, Error)]
pub enum PhpIpamError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with `success: false`
    #[error("Error from API ({code}): {message}")]
    Api {
        /// Status code reported inside the envelope
        code: i64,
        /// Service message, verbatim
        message: String,
    },

    /// Logging in with the configured credentials failed
    #[error("Error logging into API: {0}")]
    Login(#[source] Box<PhpIpamError>),

    /// Refreshing an expired token failed
    #[error("Error refreshing session token: {0}")]
    Refresh(#[source] Box<PhpIpamError>),

    /// Response body is not a valid envelope
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Envelope `data` does not match the expected output type
    #[error("Error decoding response data: {0}")]
    Decode(String),

    /// A stringified scalar could not be interpreted
    #[error("{0}")]
    TypeMismatch(String),

    /// Request input could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration cannot be used to reach the API
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PhpIpamError {
    /// True when the error came from the login or refresh exchange.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Login(_) | Self::Refresh(_))
    }

    /// Envelope code of an API error, looking through auth wrappers.
    #[must_use]
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            Self::Login(inner) | Self::Refresh(inner) => inner.api_code(),
            _ => None,
        }
    }
}

impl From<TypeMismatch> for PhpIpamError {
    fn from(err: TypeMismatch) -> Self {
        Self::TypeMismatch(err.to_string())
    }
}
