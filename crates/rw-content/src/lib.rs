//! Content loading for the Redwood bar simulation.
//!
//! All game content is declarative JSON: the inventory, the scene and bark
//! pools, and one behavior tree per actor. Loading happens once at boot and
//! is all-or-nothing — a missing or unparsable file is fatal, never silently
//! skipped — because a tick against partial content would fail in confusing
//! ways much later.

/// Compiled-in default content (the Redwood Bar).
pub mod builtin;
/// Lint-style validation of a loaded content set.
pub mod check;
/// Error types for content loading.
pub mod error;
/// The content set and directory loader.
pub mod set;
/// Template writer backing `redwood init`.
pub mod template;

pub use builtin::builtin;
pub use check::check;
pub use error::{ContentError, ContentResult};
pub use set::{ContentSet, load_dir};
pub use template::write_template;
