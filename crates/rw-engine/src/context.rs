//! Mutable context passed to every node during a tick.

use rw_core::content::BarkPool;
use rw_core::directive::DirectiveQueue;
use rw_core::rng::Mulberry32;
use rw_core::world::WorldState;

/// The borrows a node needs while ticking: the shared world, the directive
/// queue, the session RNG, the bark pool, and a diagnostics sink.
pub struct TickContext<'a> {
    /// The shared mutable world state.
    pub world: &'a mut WorldState,
    /// Pending directives for this tick.
    pub directives: &'a mut DirectiveQueue,
    /// The session-wide deterministic stream.
    pub rng: &'a mut Mulberry32,
    /// Read-only bark variants.
    pub barks: &'a BarkPool,
    /// Contained in-tick problems, drained by the caller after the tick.
    pub diagnostics: &'a mut Vec<String>,
}

impl TickContext<'_> {
    /// Queue a say-directive.
    pub fn say(&mut self, speaker: &str, text: &str) {
        self.directives.say(speaker, text);
    }

    /// Queue a divert-directive.
    pub fn divert(&mut self, path: &str) {
        self.directives.divert(path);
    }

    /// Pick one bark variant from a pool via the session RNG.
    ///
    /// A missing or empty pool is a content error: it is noted as a
    /// diagnostic and the bark is skipped, never a crash.
    pub fn bark(&mut self, key: &str) -> Option<String> {
        let Some(lines) = self.barks.lines(key) else {
            self.note(format!("missing bark pool: {key}"));
            return None;
        };
        match self.rng.pick(lines) {
            Some(line) => Some(line.clone()),
            None => {
                self.note(format!("empty bark pool: {key}"));
                None
            }
        }
    }

    /// Record a contained in-tick problem.
    pub fn note(&mut self, message: impl Into<String>) {
        self.diagnostics.push(message.into());
    }
}
