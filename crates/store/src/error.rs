//! Storage error model.

use thiserror::Error;

/// Failure at the persistence boundary.
///
/// Not recovered locally; callers propagate it unchanged to the framework
/// boundary, where it maps to a 5xx-class response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The storage backend failed (I/O, poisoned lock, connection loss).
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// A stored row could not be decoded into a domain record.
    #[error("stored record could not be decoded: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
