//! # Wire Envelopes
//!
//! Deserialization shapes for the backend's response wrapper. The domain
//! types in `stuma-core` already carry the serde renames binding them to the
//! JSON contract (`items_name`, `seller_name`, `oldPassword`, ...); this
//! module only adds the `{ message, data }` envelope most endpoints use.

use serde::Deserialize;
use stuma_core::ServerAck;

/// The backend's generic response wrapper.
///
/// A success status with `data: null` is NOT a success for endpoints that
/// promise a payload; the gateway maps it to `RemoteError::EmptyBody`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Body shape for write endpoints that answer with a bare message.
#[derive(Debug, Deserialize)]
pub struct AckBody {
    pub message: Option<String>,
}

impl AckBody {
    /// Converts into the domain acknowledgement, defaulting a missing
    /// message to the empty string.
    pub fn into_ack(self) -> ServerAck {
        ServerAck {
            message: self.message.unwrap_or_default(),
        }
    }
}
