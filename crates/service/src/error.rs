//! Coordination-layer error model.

use thiserror::Error;

use shelfmark_store::StoreError;

/// Failure while coordinating catalog lookups.
///
/// `NotFound` is a distinguishable 404-class condition; `Store` carries an
/// underlying persistence failure unchanged (5xx-class).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("entity not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
