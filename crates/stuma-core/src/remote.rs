//! # Remote Result
//!
//! Tri-state container for the outcome of an asynchronous remote operation.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Remote Operation Lifecycle (per state slot)                │
//! │                                                                         │
//! │   Absent (None) ──► Loading ──► Success(value)                          │
//! │                        │    └─► Failure(cause)                          │
//! │                        │                                                │
//! │                        └── a re-issued operation returns to Loading     │
//! │                                                                         │
//! │  Transitions never run backwards and never skip Loading. Consumers     │
//! │  handle all three variants plus the absent (not yet triggered) case.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! State slots in the managers are `Option<RemoteResult<T>>`; `None` means
//! the operation has never been triggered.

use serde::Serialize;

use crate::error::RemoteError;

/// The outcome of an asynchronous remote operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteResult<T> {
    /// The operation is in flight.
    Loading,
    /// The operation resolved with a value.
    Success(T),
    /// The operation failed; the cause carries the user-visible message.
    Failure(RemoteError),
}

impl<T> RemoteResult<T> {
    /// Whether the operation is still in flight.
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteResult::Loading)
    }

    /// Whether the operation resolved successfully.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, RemoteResult::Success(_))
    }

    /// Whether the operation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteResult::Failure(_))
    }

    /// The successful value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            RemoteResult::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the result, yielding the successful value if any.
    pub fn into_success(self) -> Option<T> {
        match self {
            RemoteResult::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure cause, if any.
    pub fn failure(&self) -> Option<&RemoteError> {
        match self {
            RemoteResult::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// The user-visible failure message, if the operation failed.
    pub fn error_message(&self) -> Option<String> {
        self.failure().map(|err| err.to_string())
    }

    /// Maps the successful value, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteResult<U> {
        match self {
            RemoteResult::Loading => RemoteResult::Loading,
            RemoteResult::Success(value) => RemoteResult::Success(f(value)),
            RemoteResult::Failure(err) => RemoteResult::Failure(err),
        }
    }
}

/// A resolved gateway outcome collapses straight into the terminal variants.
impl<T> From<Result<T, RemoteError>> for RemoteResult<T> {
    fn from(outcome: Result<T, RemoteError>) -> Self {
        match outcome {
            Ok(value) => RemoteResult::Success(value),
            Err(err) => RemoteResult::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_predicates() {
        let loading: RemoteResult<u32> = RemoteResult::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_success());
        assert_eq!(loading.success(), None);

        let success = RemoteResult::Success(7_u32);
        assert!(success.is_success());
        assert_eq!(success.success(), Some(&7));
        assert_eq!(success.into_success(), Some(7));

        let failure: RemoteResult<u32> = RemoteResult::Failure(RemoteError::MissingToken);
        assert!(failure.is_failure());
        assert_eq!(
            failure.error_message().as_deref(),
            Some("No token found. Please log in again.")
        );
    }

    #[test]
    fn test_from_gateway_outcome() {
        let ok: Result<u32, RemoteError> = Ok(3);
        assert_eq!(RemoteResult::from(ok), RemoteResult::Success(3));

        let err: Result<u32, RemoteError> = Err(RemoteError::EmptyBody);
        assert_eq!(
            RemoteResult::from(err),
            RemoteResult::Failure(RemoteError::EmptyBody)
        );
    }

    #[test]
    fn test_map_touches_only_success() {
        let success = RemoteResult::Success(2_u32).map(|n| n * 10);
        assert_eq!(success, RemoteResult::Success(20));

        let failure: RemoteResult<u32> = RemoteResult::Failure(RemoteError::EmptyBody);
        assert_eq!(
            failure.map(|n| n * 10),
            RemoteResult::Failure(RemoteError::EmptyBody)
        );
    }
}
