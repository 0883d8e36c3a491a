//! Static lint over a loaded content set.
//!
//! Walks every tree and cross-references recipes, scenes, and bark pools,
//! so a broken divert path surfaces at `check` time instead of as a
//! runtime diagnostic mid-session.

use rw_core::content::BarkPool;
use rw_engine::BehaviorNode;

use crate::set::ContentSet;

/// Scene paths the serve reducer diverts to on its own.
const SERVE_PATHS: [&str; 3] = ["barkeep.serve", "barkeep.deny", "barkeep.out_of_stock"];

/// Bark pools the serve reducer draws from.
const SERVE_BARKS: [&str; 3] = ["serve_success", "no_funds", "out_of_stock"];

/// Bark pools the tip reducer draws from.
const TIP_BARKS: [&str; 2] = ["thanks", "no_funds"];

/// Validate a content set, returning one human-readable finding per
/// problem. An empty vec means the set is clean.
pub fn check(content: &ContentSet) -> Vec<String> {
    let mut findings = Vec::new();

    for (name, recipe) in &content.inventory.recipes {
        for ingredient in &recipe.ingredients {
            if !content.inventory.stock.contains_key(&ingredient.item) {
                findings.push(format!(
                    "recipe '{name}' needs '{item}' which is not stocked",
                    item = ingredient.item
                ));
            }
        }
    }

    let mut serves = false;
    let mut tips = false;
    for (actor, tree) in &content.trees {
        tree.root.visit(&mut |node| match node {
            BehaviorNode::QueueDivert { path } => {
                if !content.scenes.contains(path) {
                    findings.push(format!(
                        "tree '{actor}' diverts to unknown scene '{path}'"
                    ));
                }
            }
            BehaviorNode::ServeDrink { drink } => {
                serves = true;
                if content.inventory.recipe(drink).is_none() {
                    findings.push(format!(
                        "tree '{actor}' serves unknown drink '{drink}'"
                    ));
                }
            }
            BehaviorNode::TakeTip { .. } => tips = true,
            _ => {}
        });
    }

    if serves {
        for path in SERVE_PATHS {
            if !content.scenes.contains(path) {
                findings.push(format!("serving requires scene '{path}'"));
            }
        }
        for key in SERVE_BARKS {
            check_bark(&content.barks, key, &mut findings);
        }
    }
    if tips {
        for key in TIP_BARKS {
            check_bark(&content.barks, key, &mut findings);
        }
    }

    findings
}

fn check_bark(barks: &BarkPool, key: &str, findings: &mut Vec<String>) {
    match barks.lines(key) {
        None => findings.push(format!("missing bark pool '{key}'")),
        Some(lines) if lines.is_empty() => {
            findings.push(format!("bark pool '{key}' is empty"));
        }
        Some(_) => {}
    }
}
