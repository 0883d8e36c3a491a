//! A per-actor behavior tree.

use serde::{Deserialize, Serialize};

use crate::context::TickContext;
use crate::node::{BehaviorNode, Status};

/// An immutable, declarative decision tree for one actor.
///
/// Trees hold no per-actor mutable state — everything mutable lives in the
/// world — so the same tree value could be shared between actors safely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorTree {
    /// Display name of the tree.
    #[serde(default)]
    pub title: String,
    /// The root node.
    pub root: BehaviorNode,
}

impl BehaviorTree {
    /// Create a tree from a title and root node.
    pub fn new(title: impl Into<String>, root: BehaviorNode) -> Self {
        Self {
            title: title.into(),
            root,
        }
    }

    /// Walk the tree once against the tick context.
    pub fn tick(&self, ctx: &mut TickContext<'_>) -> Status {
        self.root.tick(ctx)
    }
}
