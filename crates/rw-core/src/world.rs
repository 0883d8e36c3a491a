//! The shared mutable world state.
//!
//! One `WorldState` exists per session and is mutated in place for its whole
//! life. It is passed explicitly into every tick call — engine, reducers, and
//! resolver all take it as an argument — so there is exactly one writer per
//! tick and the whole thing stays testable in isolation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::signal::SignalBus;

/// Starting wallet for a fresh session.
pub const DEFAULT_WALLET: i64 = 20;

/// The single mutable record of economic and emotional state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Cash on hand. Soft-clamped at 0 by the reducers, not by invariant.
    pub wallet: i64,
    /// Open-ended named variables (mood, trust, heat, drunk, ...). Trees may
    /// introduce new keys at runtime; absent keys read as 0.
    pub vars: HashMap<String, i64>,
    /// Stock and recipes.
    pub inventory: Inventory,
    /// Pending trigger events.
    pub signals: SignalBus,
}

impl WorldState {
    /// Create the default initial state around the given inventory.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            wallet: DEFAULT_WALLET,
            vars: default_vars(),
            inventory,
            signals: SignalBus::new(),
        }
    }

    /// Read a variable, treating absent keys as 0.
    pub fn var(&self, key: &str) -> i64 {
        self.vars.get(key).copied().unwrap_or(0)
    }

    /// Set a variable to an exact value.
    pub fn set_var(&mut self, key: impl Into<String>, value: i64) {
        self.vars.insert(key.into(), value);
    }

    /// Add a delta to a variable, creating it at 0 first if absent.
    pub fn add_var(&mut self, key: &str, delta: i64) {
        *self.vars.entry(key.to_string()).or_insert(0) += delta;
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(Inventory::default())
    }
}

fn default_vars() -> HashMap<String, i64> {
    let mut vars = HashMap::new();
    vars.insert("mood".to_string(), 0);
    vars.insert("trust".to_string(), 0);
    vars.insert("heat".to_string(), 0);
    vars.insert("drunk".to_string(), 0);
    vars.insert("romance".to_string(), 0);
    vars.insert("guard_near".to_string(), 1);
    vars.insert("crowd".to_string(), 2);
    vars
}
