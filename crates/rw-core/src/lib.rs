//! Core world model for the Redwood bar simulation.
//!
//! Everything mutable in a session lives in one [`WorldState`] value that is
//! passed explicitly into every tick: the wallet, the open-ended variable map,
//! the inventory, and the pending signal multiset. The other types here are
//! the contracts the behavior engine is built against — the counted
//! [`SignalBus`], the append-only [`DirectiveQueue`], the deterministic
//! [`Mulberry32`] stream, the validated state reducers, and the read-only
//! content pools.

/// Read-only scene and bark line pools.
pub mod content;
/// Narrative directives and the per-tick queue.
pub mod directive;
/// Error types for the core crate.
pub mod error;
/// Stock and recipe data.
pub mod inventory;
/// Deterministic 32-bit random stream.
pub mod rng;
/// Validated state transitions: serve and tip.
pub mod reducer;
/// Counted trigger-event multiset.
pub mod signal;
/// World snapshot encode/restore.
pub mod snapshot;
/// The shared mutable world state.
pub mod world;

pub use content::{BarkPool, SceneEntry, SceneLine, ScenePool};
pub use directive::{Directive, DirectiveQueue};
pub use error::{CoreError, CoreResult};
pub use inventory::{Ingredient, Inventory, Recipe};
pub use reducer::{ServeCheck, can_serve, serve, tip};
pub use rng::Mulberry32;
pub use signal::SignalBus;
pub use world::WorldState;
