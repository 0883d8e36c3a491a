//! The node vocabulary.
//!
//! Trees are pure data: a closed tagged enum of composites and domain
//! leaves, each variant carrying its literal parameters. The engine
//! dispatches on the tag, so the leaf set stays finite, auditable, and
//! trivially serializable — content authors can redesign behavior without
//! touching engine code.

use serde::{Deserialize, Serialize};

use rw_core::reducer::{self, ServeCheck};

use crate::context::TickContext;

/// Speaker attached to reducer barks.
const BARKEEP: &str = "Barkeep";

/// The result of ticking a node. There is no "running" state: every tick is
/// a complete, bounded traversal with no cross-tick continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The node succeeded.
    Success,
    /// The node failed.
    Failure,
}

impl Status {
    /// Success for `true`, failure for `false`.
    pub fn from_bool(ok: bool) -> Self {
        if ok { Self::Success } else { Self::Failure }
    }

    /// Whether this is [`Status::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// One node of a declarative behavior tree.
///
/// Conditions never mutate; actions may mutate the world or the queues but
/// always return a plain status, so one tick is fully deterministic given
/// the world, the signal bus, and the RNG position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum BehaviorNode {
    /// Tick children in order; fail fast on the first failure, succeed only
    /// if all children succeed.
    Sequence {
        /// Children in evaluation order.
        children: Vec<BehaviorNode>,
    },
    /// Tick children in order; succeed fast on the first success, fail only
    /// if all children fail.
    Selector {
        /// Children in evaluation order.
        children: Vec<BehaviorNode>,
    },
    /// Succeed iff the signal is pending. Does not consume.
    IfEvent {
        /// Signal name.
        name: String,
    },
    /// Consume one unit of the signal; succeed iff a unit was consumed.
    ConsumeEvent {
        /// Signal name.
        name: String,
    },
    /// Add a delta to a var. Always succeeds.
    AddVar {
        /// Var key.
        key: String,
        /// Delta to add.
        #[serde(default)]
        delta: i64,
    },
    /// Succeed iff the var is at least the threshold.
    IfVarGte {
        /// Var key.
        key: String,
        /// Inclusive threshold.
        #[serde(default)]
        value: i64,
    },
    /// Succeed iff the var is at most the threshold.
    IfVarLte {
        /// Var key.
        key: String,
        /// Inclusive threshold.
        #[serde(default)]
        value: i64,
    },
    /// Queue a literal say-directive. Always succeeds.
    QueueSay {
        /// Who speaks.
        #[serde(default = "default_speaker")]
        speaker: String,
        /// The line.
        #[serde(default)]
        text: String,
    },
    /// Queue a divert-directive. Always succeeds.
    QueueDivert {
        /// Content key to divert to.
        path: String,
    },
    /// Run the serve reducer and queue its directive path.
    ServeDrink {
        /// Drink name.
        drink: String,
    },
    /// Run the tip reducer and queue a thanks or no-funds bark.
    TakeTip {
        /// Tip amount.
        #[serde(default = "default_tip_amount")]
        amount: i64,
    },
}

fn default_speaker() -> String {
    "NPC".to_string()
}

fn default_tip_amount() -> i64 {
    1
}

impl BehaviorNode {
    /// Evaluate this node against the tick context.
    pub fn tick(&self, ctx: &mut TickContext<'_>) -> Status {
        match self {
            Self::Sequence { children } => {
                for child in children {
                    if !child.tick(ctx).is_success() {
                        return Status::Failure;
                    }
                }
                Status::Success
            }
            Self::Selector { children } => {
                for child in children {
                    if child.tick(ctx).is_success() {
                        return Status::Success;
                    }
                }
                Status::Failure
            }
            Self::IfEvent { name } => Status::from_bool(ctx.world.signals.peek(name)),
            Self::ConsumeEvent { name } => Status::from_bool(ctx.world.signals.consume(name)),
            Self::AddVar { key, delta } => {
                ctx.world.add_var(key, *delta);
                Status::Success
            }
            Self::IfVarGte { key, value } => Status::from_bool(ctx.world.var(key) >= *value),
            Self::IfVarLte { key, value } => Status::from_bool(ctx.world.var(key) <= *value),
            Self::QueueSay { speaker, text } => {
                ctx.say(speaker, text);
                Status::Success
            }
            Self::QueueDivert { path } => {
                ctx.divert(path);
                Status::Success
            }
            Self::ServeDrink { drink } => serve_drink(ctx, drink),
            Self::TakeTip { amount } => take_tip(ctx, *amount),
        }
    }

    /// Visit this node and every descendant, depth-first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a BehaviorNode)) {
        f(self);
        if let Self::Sequence { children } | Self::Selector { children } = self {
            for child in children {
                child.visit(f);
            }
        }
    }
}

/// Serve a drink, queueing exactly one bark and one reason-specific divert
/// for every recognized outcome. Only an unknown drink name fails, and that
/// is a contained content error.
fn serve_drink(ctx: &mut TickContext<'_>, drink: &str) -> Status {
    match reducer::can_serve(ctx.world, drink) {
        ServeCheck::Ready { .. } => {
            reducer::serve(ctx.world, drink);
            if let Some(line) = ctx.bark("serve_success") {
                ctx.say(BARKEEP, &line);
            }
            ctx.divert("barkeep.serve");
            Status::Success
        }
        ServeCheck::ShortFunds => {
            if let Some(line) = ctx.bark("no_funds") {
                ctx.say(BARKEEP, &line);
            }
            ctx.divert("barkeep.deny");
            Status::Success
        }
        ServeCheck::OutOfStock { item } => {
            if let Some(line) = ctx.bark("out_of_stock") {
                ctx.say(BARKEEP, &line.replace("{item}", &item));
            }
            ctx.divert("barkeep.out_of_stock");
            Status::Success
        }
        ServeCheck::UnknownDrink => {
            ctx.note(format!("unknown drink: {drink}"));
            Status::Failure
        }
    }
}

/// Take a tip, thanking on success and deflecting on empty pockets. Denial
/// is a first-class outcome, so the leaf always succeeds.
fn take_tip(ctx: &mut TickContext<'_>, amount: i64) -> Status {
    let pool = if reducer::tip(ctx.world, amount) {
        "thanks"
    } else {
        "no_funds"
    };
    if let Some(line) = ctx.bark(pool) {
        ctx.say(BARKEEP, &line);
    }
    Status::Success
}
