//! Flow error taxonomy
//!
//! Four families: `Validation` (local, never reaches the network),
//! `Conflict` (backend 400/409/423, non-retryable without changing the
//! selection), `Transient` (retryable by resubmitting, which starts a
//! fresh intent), and `Contract` (the backend broke its own contract;
//! surfaced and logged, never silently ignored).

use courtside_client::ClientError;
use thiserror::Error;

/// Which backend conflict was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// 423 - partner already registered elsewhere
    PartnerUnavailable,
    /// 409 - player already registered and paid
    AlreadyRegistered,
    /// 400 - e.g. registered with a different partner
    RegistrationConflict,
}

impl ConflictKind {
    /// Short user-facing title, mirroring what the backend status means.
    pub fn title(&self) -> &'static str {
        match self {
            Self::PartnerUnavailable => "Partner unavailable",
            Self::AlreadyRegistered => "Already registered",
            Self::RegistrationConflict => "Registration conflict",
        }
    }
}

/// Error type for the registration flow
#[derive(Debug, Error)]
pub enum FlowError {
    /// Client-side validation failure; blocks locally.
    #[error("{0}")]
    Validation(String),

    /// Backend-reported conflict; not retryable without changing the
    /// selection.
    #[error("{message}")]
    Conflict {
        kind: ConflictKind,
        message: String,
    },

    /// Card or validation failure from the payment gateway; the
    /// existing intent stays usable for a retry.
    #[error("payment not accepted: {0}")]
    PaymentDeclined(String),

    /// Network/5xx/unexpected failure; retryable by resubmitting.
    #[error("{0}")]
    Transient(String),

    /// The backend violated its contract (malformed payload, negative
    /// amount).
    #[error("backend contract violation: {0}")]
    Contract(String),

    /// Intent creation returned neither a client secret nor the
    /// free-registration flag.
    #[error("payment intent is missing its client secret")]
    PaymentIntentMissing,

    /// No tournament currently has open registration.
    #[error("no tournament with open registration")]
    NoOpenTournament,

    /// Session expired; the host application must re-authenticate.
    #[error("authentication required")]
    Unauthorized,
}

impl FlowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }

    /// Whether the user may simply resubmit.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transient(_)
                | Self::PaymentDeclined(_)
                | Self::Contract(_)
                | Self::PaymentIntentMissing
        )
    }
}

impl From<ClientError> for FlowError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::PartnerUnavailable(message) => Self::Conflict {
                kind: ConflictKind::PartnerUnavailable,
                message,
            },
            ClientError::AlreadyRegistered(message) => Self::Conflict {
                kind: ConflictKind::AlreadyRegistered,
                message,
            },
            ClientError::RegistrationConflict(message) => Self::Conflict {
                kind: ConflictKind::RegistrationConflict,
                message,
            },
            ClientError::Unauthorized => Self::Unauthorized,
            ClientError::InvalidResponse(message) => Self::Contract(message),
            other => Self::Transient(other.to_string()),
        }
    }
}

/// Result type for flow operations
pub type FlowResult<T> = Result<T, FlowError>;
