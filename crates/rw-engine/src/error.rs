//! Error types for the behavior engine.

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while assembling a stage.
///
/// Nothing inside a tick errors: in-tick problems (missing content keys,
/// unrecognized drinks) degrade to leaf failure plus a diagnostic line and
/// never abort the remaining trees.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An actor with the same name is already registered.
    #[error("actor already registered: \"{0}\"")]
    DuplicateActor(String),
}
