//! The player-facing choice table.
//!
//! The engine only ever sees raised signals; which choices a menu offers is
//! a frontend policy. The table here reproduces the original bar menu:
//! calling the guard only appears once things are heated, and the menu is
//! capped at six entries.

use rw_core::world::WorldState;

/// Most entries a menu will show at once.
pub const MENU_LIMIT: usize = 6;

/// One selectable player choice: a stable id, a menu label, and the signal
/// it raises.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceSpec {
    /// Stable id, usable from scripted runs.
    pub id: &'static str,
    /// Label shown in the menu.
    pub label: &'static str,
    /// Signal raised on the bus when picked.
    pub signal: &'static str,
}

/// Every choice the frontend knows, in menu order.
pub const CHOICES: [ChoiceSpec; 7] = [
    ChoiceSpec {
        id: "order_ale",
        label: "Order Ale",
        signal: "order_ale",
    },
    ChoiceSpec {
        id: "order_gin_tonic",
        label: "Order Gin & Tonic",
        signal: "order_gin_tonic",
    },
    ChoiceSpec {
        id: "order_old_fashioned",
        label: "Order Old Fashioned",
        signal: "order_old_fashioned",
    },
    ChoiceSpec {
        id: "tip_2",
        label: "Tip 2 coins",
        signal: "tip_2",
    },
    ChoiceSpec {
        id: "call_guard",
        label: "Call the guard over",
        signal: "alarm",
    },
    ChoiceSpec {
        id: "ask_rumor",
        label: "Ask about the rumor",
        signal: "ask_rumor",
    },
    ChoiceSpec {
        id: "walk_out",
        label: "Walk out without paying",
        signal: "theft",
    },
];

/// The menu for the current world state: calling the guard needs visible
/// trouble (heat of at least 2), and the result never exceeds [`MENU_LIMIT`].
pub fn menu(world: &WorldState) -> Vec<ChoiceSpec> {
    let mut entries: Vec<ChoiceSpec> = CHOICES
        .iter()
        .filter(|choice| choice.id != "call_guard" || world.var("heat") >= 2)
        .copied()
        .collect();
    entries.truncate(MENU_LIMIT);
    entries
}

/// Look up a choice by id.
pub fn by_id(id: &str) -> Option<ChoiceSpec> {
    CHOICES.iter().find(|choice| choice.id == id).copied()
}
