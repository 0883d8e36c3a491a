//! The content set and directory loader.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use rw_core::content::{BarkPool, ScenePool};
use rw_core::inventory::Inventory;
use rw_engine::BehaviorTree;

use crate::error::{ContentError, ContentResult};

/// Everything the stage needs, loaded before the first tick.
#[derive(Debug, Clone)]
pub struct ContentSet {
    /// Stock and recipes.
    pub inventory: Inventory,
    /// Scene lines by path.
    pub scenes: ScenePool,
    /// Bark variants by pool name.
    pub barks: BarkPool,
    /// One tree per actor, in tick order.
    pub trees: Vec<(String, BehaviorTree)>,
}

/// The `trees/actors.json` manifest: actor names in tick order.
#[derive(Debug, Deserialize)]
struct ActorManifest {
    actors: Vec<String>,
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> ContentResult<T> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a content directory.
///
/// Expects `inventory.json`, `scenes.json`, `barks.json`, and
/// `trees/actors.json` naming one `trees/<actor>.json` per actor. Any
/// missing or malformed file aborts the load with the offending path.
pub fn load_dir(dir: &Path) -> ContentResult<ContentSet> {
    let inventory = read_json(&dir.join("inventory.json"))?;
    let scenes = read_json(&dir.join("scenes.json"))?;
    let barks = read_json(&dir.join("barks.json"))?;

    let manifest: ActorManifest = read_json(&dir.join("trees").join("actors.json"))?;
    let mut trees = Vec::with_capacity(manifest.actors.len());
    for actor in manifest.actors {
        let tree = read_json(&dir.join("trees").join(format!("{actor}.json")))?;
        trees.push((actor, tree));
    }

    Ok(ContentSet {
        inventory,
        scenes,
        barks,
        trees,
    })
}
