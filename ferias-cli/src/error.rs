//! Error kinds surfaced by the store to the presentation layer.

use thiserror::Error;

/// Failure modes of the two roster operations.
///
/// Every variant carries a human-readable message; the store also mirrors
/// the message into its error slot so the presentation layer can render it
/// after the fact.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Read endpoint unreachable or returned a non-success status.
    #[error("failed to fetch the vacation roster: {0}")]
    Fetch(String),
    /// Response body could not be decoded as a roster array.
    #[error("failed to decode the vacation roster: {0}")]
    Decode(String),
    /// Write endpoint unreachable or returned a non-success status.
    #[error("failed to save changes: {0}")]
    Save(String),
    /// A load or save is already running on this store.
    #[error("another operation is still in flight")]
    OperationInFlight,
}
