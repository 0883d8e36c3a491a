//! Validated state transitions.
//!
//! Reducers are the only code allowed to spend the wallet or draw down
//! stock. Denials are first-class outcomes, not errors: a drink the player
//! cannot afford produces a [`ServeCheck::ShortFunds`], which the engine
//! turns into its own directive path.

use crate::world::WorldState;

/// The outcome of checking whether a drink can be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeCheck {
    /// The drink can be served at this price.
    Ready {
        /// Price that `serve` will charge.
        price: i64,
    },
    /// No recipe by that name.
    UnknownDrink,
    /// The wallet cannot cover the price.
    ShortFunds,
    /// An ingredient is short.
    OutOfStock {
        /// The first deficient ingredient in recipe-declaration order.
        item: String,
    },
}

impl ServeCheck {
    /// Whether the check allows a serve.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Check whether `drink` can be served. Pure: no mutation, and repeated
/// calls against the same state agree.
///
/// Check order is fixed: unknown recipe, then funds, then the first
/// deficient ingredient in declaration order (first-deficiency policy, not
/// "most deficient").
pub fn can_serve(world: &WorldState, drink: &str) -> ServeCheck {
    let Some(recipe) = world.inventory.recipe(drink) else {
        return ServeCheck::UnknownDrink;
    };
    if world.wallet < recipe.price {
        return ServeCheck::ShortFunds;
    }
    for ingredient in &recipe.ingredients {
        if world.inventory.stock_of(&ingredient.item) < ingredient.qty {
            return ServeCheck::OutOfStock {
                item: ingredient.item.clone(),
            };
        }
    }
    ServeCheck::Ready {
        price: recipe.price,
    }
}

/// Serve a drink: draw down stock, charge the wallet, apply recipe effects.
///
/// Re-validates via [`can_serve`] and applies nothing on a failed check, so
/// stock can never go negative and mutations are all-or-nothing. Effects
/// default to drunk +1, mood +1, trust +0 when the recipe leaves them
/// unspecified; any other declared effect keys apply verbatim.
pub fn serve(world: &mut WorldState, drink: &str) -> bool {
    let price = match can_serve(world, drink) {
        ServeCheck::Ready { price } => price,
        _ => return false,
    };
    let Some(recipe) = world.inventory.recipe(drink).cloned() else {
        return false;
    };

    for ingredient in &recipe.ingredients {
        if let Some(on_hand) = world.inventory.stock.get_mut(&ingredient.item) {
            *on_hand -= ingredient.qty;
        }
    }
    world.wallet -= price;

    world.add_var("drunk", recipe.effects.get("drunk").copied().unwrap_or(1));
    world.add_var("mood", recipe.effects.get("mood").copied().unwrap_or(1));
    world.add_var("trust", recipe.effects.get("trust").copied().unwrap_or(0));
    for (key, delta) in &recipe.effects {
        if !matches!(key.as_str(), "drunk" | "mood" | "trust") {
            world.add_var(key, *delta);
        }
    }
    true
}

/// Accept a tip. Returns `false` with no mutation when the wallet cannot
/// cover it; otherwise charges the wallet, raises trust (+2 from 5 up, else
/// +1), and from 5 up also cools heat by 1, floored at 0.
pub fn tip(world: &mut WorldState, amount: i64) -> bool {
    if world.wallet < amount {
        return false;
    }
    world.wallet -= amount;
    world.add_var("trust", if amount >= 5 { 2 } else { 1 });
    let cooled = if amount >= 5 { 1 } else { 0 };
    world.set_var("heat", (world.var("heat") - cooled).max(0));
    true
}
