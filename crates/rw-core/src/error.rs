//! Error types for the core world model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in the core world model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A world snapshot could not be encoded.
    #[error("snapshot encode failed: {0}")]
    SnapshotEncode(#[from] serde_json::Error),
}
