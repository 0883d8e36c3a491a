//! Behavior tree engine for the Redwood bar simulation.
//!
//! Each actor owns one immutable, declarative [`BehaviorTree`]. Once per
//! player choice the [`Stage`] evaluates every tree against the shared world
//! state and signal bus, collecting narrative [`Directive`]s, and only after
//! all trees have run is the queue drained — decisions first, rendering
//! second. A tick is a complete, bounded traversal: no leaf suspends, blocks,
//! or carries state across ticks.
//!
//! [`Directive`]: rw_core::Directive

pub mod context;
pub mod error;
pub mod node;
pub mod scene;
pub mod stage;
pub mod tree;

pub use context::TickContext;
pub use error::{EngineError, EngineResult};
pub use node::{BehaviorNode, Status};
pub use stage::{DEFAULT_SEED, Stage, StageConfig};
pub use tree::BehaviorTree;
