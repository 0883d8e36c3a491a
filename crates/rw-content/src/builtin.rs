//! The bundled bar content, compiled into the binary.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::error::{ContentError, ContentResult};
use crate::set::ContentSet;

pub(crate) const INVENTORY: &str = include_str!("../data/inventory.json");
pub(crate) const SCENES: &str = include_str!("../data/scenes.json");
pub(crate) const BARKS: &str = include_str!("../data/barks.json");
pub(crate) const ACTORS: &str = include_str!("../data/trees/actors.json");
pub(crate) const TREE_BARKEEP: &str = include_str!("../data/trees/barkeep.json");
pub(crate) const TREE_GUARD: &str = include_str!("../data/trees/guard.json");
pub(crate) const TREE_STRANGER: &str = include_str!("../data/trees/stranger.json");

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> ContentResult<T> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse {
        path: PathBuf::from(format!("builtin:{name}")),
        source,
    })
}

/// The default bar: three actors, three recipes, and enough scenes to
/// cover every path the trees can divert to.
pub fn builtin() -> ContentResult<ContentSet> {
    Ok(ContentSet {
        inventory: parse("inventory.json", INVENTORY)?,
        scenes: parse("scenes.json", SCENES)?,
        barks: parse("barks.json", BARKS)?,
        trees: vec![
            ("barkeep".to_string(), parse("trees/barkeep.json", TREE_BARKEEP)?),
            ("guard".to_string(), parse("trees/guard.json", TREE_GUARD)?),
            ("stranger".to_string(), parse("trees/stranger.json", TREE_STRANGER)?),
        ],
    })
}
