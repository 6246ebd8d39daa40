//! Client error types

use thiserror::Error;

/// Client error type
///
/// The registration flow branches on three backend conflict statuses,
/// so each gets its own variant: 423 (partner already committed
/// elsewhere), 409 (already registered and paid), 400 (registered with
/// a different partner, or an otherwise invalid request).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or session expired (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Partner is already registered elsewhere (423)
    #[error("Partner unavailable: {0}")]
    PartnerUnavailable(String),

    /// Player already registered and paid in this category (409)
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    /// Registration conflict, e.g. a different partner on file (400)
    #[error("Registration conflict: {0}")]
    RegistrationConflict(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether resubmitting the same request may succeed.
    ///
    /// Conflict statuses require the player to change their selection
    /// first; everything else is treated as transient.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Self::PartnerUnavailable(_)
                | Self::AlreadyRegistered(_)
                | Self::RegistrationConflict(_)
                | Self::Unauthorized
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
