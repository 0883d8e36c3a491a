//! The stage: world + actors + one deterministic stream.
//!
//! One `Stage` owns everything a session mutates and drives the two-phase
//! tick: every actor tree is evaluated in registration order against the
//! shared world, and only then is the directive queue drained. Signals one
//! actor's tree raises or consumes are immediately visible to the actors
//! ticked after it — the bus is shared within a tick by design.

use rw_core::content::{BarkPool, SceneLine, ScenePool};
use rw_core::directive::{Directive, DirectiveQueue};
use rw_core::rng::Mulberry32;
use rw_core::world::WorldState;

use crate::context::TickContext;
use crate::error::{EngineError, EngineResult};
use crate::scene;
use crate::tree::BehaviorTree;

/// Seed of the original Redwood Bar session.
pub const DEFAULT_SEED: u32 = 987_654_321;

/// Configuration for a stage.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// RNG seed for reproducible sessions.
    pub seed: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl StageConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

/// One registered actor: a name and its tree.
#[derive(Debug, Clone)]
struct Actor {
    name: String,
    tree: BehaviorTree,
}

/// The tick orchestrator.
pub struct Stage {
    world: WorldState,
    actors: Vec<Actor>,
    rng: Mulberry32,
    directives: DirectiveQueue,
    scenes: ScenePool,
    barks: BarkPool,
    diagnostics: Vec<String>,
    tick: u64,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("tick", &self.tick)
            .field("actors", &self.actors.len())
            .field("pending_directives", &self.directives.len())
            .finish()
    }
}

impl Stage {
    /// Create a stage from a world, content pools, and configuration.
    pub fn new(world: WorldState, scenes: ScenePool, barks: BarkPool, config: StageConfig) -> Self {
        Self {
            world,
            actors: Vec::new(),
            rng: Mulberry32::new(config.seed),
            directives: DirectiveQueue::new(),
            scenes,
            barks,
            diagnostics: Vec::new(),
            tick: 0,
        }
    }

    /// Register an actor. Actors are ticked in registration order.
    pub fn add_actor(&mut self, name: impl Into<String>, tree: BehaviorTree) -> EngineResult<()> {
        let name = name.into();
        if self.actors.iter().any(|a| a.name == name) {
            return Err(EngineError::DuplicateActor(name));
        }
        self.actors.push(Actor { name, tree });
        Ok(())
    }

    /// Raise a signal on the world's bus — the entry point for a player
    /// choice.
    pub fn raise(&mut self, signal: &str) {
        self.world.signals.raise(signal);
    }

    /// Run one game tick: evaluate every actor tree in order, then drain.
    ///
    /// The drain happens strictly after all trees have run, so directive
    /// order reflects tree evaluation order (actor A's directives precede
    /// actor B's) and is FIFO within an actor. A failing leaf never aborts
    /// the remaining trees.
    pub fn tick(&mut self) -> Vec<Directive> {
        for actor in &self.actors {
            let mut ctx = TickContext {
                world: &mut self.world,
                directives: &mut self.directives,
                rng: &mut self.rng,
                barks: &self.barks,
                diagnostics: &mut self.diagnostics,
            };
            actor.tree.tick(&mut ctx);
        }
        self.tick += 1;
        self.directives.drain_all()
    }

    /// Resolve a divert path to one scene line via the shared stream.
    ///
    /// A missing path is recorded as a diagnostic and resolves to `None`.
    pub fn resolve_scene(&mut self, path: &str) -> Option<SceneLine> {
        match scene::resolve(&self.scenes, &mut self.rng, path) {
            Some(line) => Some(line.clone()),
            None => {
                self.diagnostics.push(format!("missing scene: {path}"));
                None
            }
        }
    }

    /// Take every diagnostic recorded since the last drain.
    pub fn drain_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }

    /// The world state.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Mutable access to the world state.
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Completed tick count.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// The registered actor names, in tick order.
    pub fn actor_names(&self) -> Vec<&str> {
        self.actors.iter().map(|a| a.name.as_str()).collect()
    }

    /// Extract the world, consuming the stage.
    pub fn into_world(self) -> WorldState {
        self.world
    }
}
