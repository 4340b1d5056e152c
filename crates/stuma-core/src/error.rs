//! # Error Types
//!
//! Failure taxonomy for the StuMa client.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  RemoteError       - Why a remote operation failed                      │
//! │  ├── MissingToken  - No session token; the network is never touched     │
//! │  ├── Api           - HTTP response received, non-success status         │
//! │  ├── Transport     - Network failure, timeout, malformed payload        │
//! │  ├── EmptyBody     - Success status but a null/missing payload          │
//! │  └── Validation    - Rejected locally before the request was built      │
//! │                                                                         │
//! │  ValidationError   - Input validation failures (sell and auth forms)    │
//! │                                                                         │
//! │  Flow: ValidationError → RemoteError → RemoteResult::Failure → UI       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every manager operation that can fail converts to
//! [`RemoteResult::Failure`](crate::remote::RemoteResult) at the manager
//! boundary; nothing propagates past it as an unhandled fault. The `Display`
//! output of each variant is the user-visible message.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Remote Error
// =============================================================================

/// Why a remote operation failed.
///
/// Carried inside [`RemoteResult::Failure`](crate::remote::RemoteResult) so
/// the presentation layer can render a message and offer a retry.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoteError {
    /// No session token is stored. Reported without attempting the call.
    #[error("No token found. Please log in again.")]
    MissingToken,

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed, or the payload failed to decode.
    #[error("{message}")]
    Transport { message: String },

    /// Success status but a null body where a payload was required.
    /// Distinct from an empty list, which is a valid success.
    #[error("Response body is null.")]
    EmptyBody,

    /// Input rejected locally before any request was built.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RemoteError {
    /// Wraps an underlying transport or decode error, preserving its message.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        RemoteError::Transport {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when form input doesn't meet requirements. Used for early
/// validation before a request is built.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., an email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
