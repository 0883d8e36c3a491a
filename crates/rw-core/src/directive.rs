//! Narrative directives and the per-tick queue.
//!
//! Directives decouple "decisions made this tick" from "output rendered this
//! tick": tree actions push them while the trees run, and the caller drains
//! the whole batch once every actor has ticked. Directives are never
//! persisted.

/// A queued narrative side-effect produced during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// A dialogue line to render verbatim.
    Say {
        /// Who speaks the line.
        speaker: String,
        /// The line itself.
        text: String,
    },
    /// A jump to a content key, resolved by the scene resolver at render time.
    Divert {
        /// The content pool path.
        path: String,
    },
}

/// An append-only buffer of pending directives, drained once per tick.
#[derive(Debug, Clone, Default)]
pub struct DirectiveQueue {
    pending: Vec<Directive>,
}

impl DirectiveQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directive. Unbounded, no dedup.
    pub fn enqueue(&mut self, directive: Directive) {
        self.pending.push(directive);
    }

    /// Append a say-directive.
    pub fn say(&mut self, speaker: impl Into<String>, text: impl Into<String>) {
        self.enqueue(Directive::Say {
            speaker: speaker.into(),
            text: text.into(),
        });
    }

    /// Append a divert-directive.
    pub fn divert(&mut self, path: impl Into<String>) {
        self.enqueue(Directive::Divert { path: path.into() });
    }

    /// Take every pending directive in FIFO order, leaving the queue empty.
    pub fn drain_all(&mut self) -> Vec<Directive> {
        std::mem::take(&mut self.pending)
    }

    /// The number of pending directives.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_fifo_order() {
        let mut queue = DirectiveQueue::new();
        queue.say("Barkeep", "There you go.");
        queue.divert("barkeep.serve");
        queue.say("Guard", "Settle down.");

        let drained = queue.drain_all();
        assert_eq!(drained.len(), 3);
        assert_eq!(
            drained[0],
            Directive::Say {
                speaker: "Barkeep".into(),
                text: "There you go.".into()
            }
        );
        assert_eq!(
            drained[1],
            Directive::Divert {
                path: "barkeep.serve".into()
            }
        );
    }

    #[test]
    fn drain_leaves_queue_empty() {
        let mut queue = DirectiveQueue::new();
        queue.divert("barkeep.deny");
        assert!(!queue.is_empty());

        queue.drain_all();
        assert!(queue.is_empty());
        assert!(queue.drain_all().is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut queue = DirectiveQueue::new();
        queue.divert("barkeep.serve");
        queue.divert("barkeep.serve");
        assert_eq!(queue.len(), 2);
    }
}
