pub mod check;
pub mod choices;
pub mod init;
pub mod play;
pub mod run;

use std::path::Path;

use rw_content::ContentSet;
use rw_core::world::WorldState;
use rw_engine::{Stage, StageConfig};

/// Load a content directory, or the builtin bar when no directory is given.
fn load_content(dir: Option<&Path>) -> Result<ContentSet, String> {
    let content = match dir {
        Some(dir) => rw_content::load_dir(dir).map_err(|e| e.to_string())?,
        None => rw_content::builtin().map_err(|e| e.to_string())?,
    };

    let findings = rw_content::check(&content);
    if !findings.is_empty() {
        return Err(format!(
            "content failed validation:\n  {}",
            findings.join("\n  ")
        ));
    }
    Ok(content)
}

/// Build a stage around a world, registering every actor in manifest order.
fn build_stage(world: WorldState, content: &ContentSet, seed: u32) -> Result<Stage, String> {
    let mut stage = Stage::new(
        world,
        content.scenes.clone(),
        content.barks.clone(),
        StageConfig::default().with_seed(seed),
    );
    for (name, tree) in &content.trees {
        stage.add_actor(name.clone(), tree.clone()).map_err(|e| e.to_string())?;
    }
    Ok(stage)
}

/// One-line status readout. Stock is sorted so the line is stable across runs.
fn hud(world: &WorldState) -> String {
    let mut stock: Vec<(&str, i64)> = world
        .inventory
        .stock
        .iter()
        .map(|(item, qty)| (item.as_str(), *qty))
        .collect();
    stock.sort_by_key(|(item, _)| *item);
    let stock = stock
        .iter()
        .map(|(item, qty)| format!("{item}:{qty}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "cash ${} | trust {} | heat {} | drunk {} | stock {}",
        world.wallet,
        world.var("trust"),
        world.var("heat"),
        world.var("drunk"),
        stock
    )
}
