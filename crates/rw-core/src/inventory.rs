//! Stock and recipe data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One ingredient requirement of a recipe.
///
/// Ingredients are a list rather than a map because declaration order is
/// load-bearing: stock checks report the first deficient ingredient in the
/// order the recipe declares them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Stock item name.
    pub item: String,
    /// Units required per serving.
    pub qty: i64,
}

/// A drink recipe: price, required ingredients, and var effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Price charged against the wallet.
    pub price: i64,
    /// Required ingredients in declaration order.
    pub ingredients: Vec<Ingredient>,
    /// Var deltas applied on a successful serve. Absent keys fall back to
    /// drunk +1, mood +1, trust +0.
    #[serde(default)]
    pub effects: HashMap<String, i64>,
}

/// The bar's stock levels and known recipes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Units on hand per ingredient. Never negative after a reducer runs.
    #[serde(default)]
    pub stock: HashMap<String, i64>,
    /// Recipes by drink name.
    #[serde(default)]
    pub recipes: HashMap<String, Recipe>,
}

impl Inventory {
    /// Units on hand for an item, treating absent items as 0.
    pub fn stock_of(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Look up a recipe by drink name.
    pub fn recipe(&self, drink: &str) -> Option<&Recipe> {
        self.recipes.get(drink)
    }
}
