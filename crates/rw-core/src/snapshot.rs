//! World snapshot encode/restore.
//!
//! The entire world state is snapshotted after every tick and restored at
//! boot. Restoring merges each structurally valid top-level field over the
//! default initial state, so a corrupt or partially written save degrades to
//! defaults instead of aborting startup.

use serde_json::Value;

use crate::error::CoreResult;
use crate::world::WorldState;

/// Encode the world as pretty-printed JSON.
pub fn to_json(world: &WorldState) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(world)?)
}

/// Restore a snapshot by merging it over `base`.
///
/// Each of wallet, vars, inventory, and signals is taken from the snapshot
/// independently when it parses; anything corrupt or missing keeps the base
/// value. Never fails.
pub fn restore(raw: &str, mut base: WorldState) -> WorldState {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return base;
    };
    let Value::Object(map) = value else {
        return base;
    };

    if let Some(wallet) = map.get("wallet").and_then(Value::as_i64) {
        base.wallet = wallet;
    }
    if let Some(vars) = map.get("vars") {
        if let Ok(vars) = serde_json::from_value(vars.clone()) {
            base.vars = vars;
        }
    }
    if let Some(inventory) = map.get("inventory") {
        if let Ok(inventory) = serde_json::from_value(inventory.clone()) {
            base.inventory = inventory;
        }
    }
    if let Some(signals) = map.get("signals") {
        if let Ok(signals) = serde_json::from_value(signals.clone()) {
            base.signals = signals;
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Ingredient, Inventory, Recipe};
    use std::collections::HashMap;

    fn sample_world() -> WorldState {
        let mut inventory = Inventory::default();
        inventory.stock.insert("malt".to_string(), 4);
        inventory.recipes.insert(
            "ale".to_string(),
            Recipe {
                price: 2,
                ingredients: vec![Ingredient {
                    item: "malt".to_string(),
                    qty: 1,
                }],
                effects: HashMap::new(),
            },
        );
        let mut world = WorldState::new(inventory);
        world.wallet = 13;
        world.set_var("trust", 4);
        world.signals.raise("ask_rumor");
        world
    }

    #[test]
    fn round_trip_is_identical() {
        let world = sample_world();
        let raw = to_json(&world).unwrap();
        let restored = restore(&raw, WorldState::default());
        assert_eq!(restored.wallet, world.wallet);
        assert_eq!(restored.vars, world.vars);
        assert_eq!(restored.inventory.stock, world.inventory.stock);
        assert_eq!(restored.signals, world.signals);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_base() {
        let base = sample_world();
        let restored = restore("{not json", base.clone());
        assert_eq!(restored, base);
    }

    #[test]
    fn non_object_snapshot_falls_back_to_base() {
        let base = sample_world();
        assert_eq!(restore("42", base.clone()), base);
        assert_eq!(restore("[1, 2]", base.clone()), base);
    }

    #[test]
    fn partial_snapshot_merges_over_base() {
        let base = sample_world();
        let restored = restore(r#"{ "wallet": 7 }"#, base.clone());
        assert_eq!(restored.wallet, 7);
        assert_eq!(restored.vars, base.vars);
        assert_eq!(restored.inventory, base.inventory);
    }

    #[test]
    fn invalid_field_keeps_base_value() {
        let base = sample_world();
        let restored = restore(r#"{ "wallet": 9, "vars": "oops" }"#, base.clone());
        assert_eq!(restored.wallet, 9);
        assert_eq!(restored.vars, base.vars);
    }
}
