//! Read-only content pools.
//!
//! Scenes and barks are loaded once at boot and never mutated; each key maps
//! to one line or an ordered list of variants, and the engine's RNG picks
//! one variant per resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One line of rendered dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneLine {
    /// Who speaks the line.
    pub speaker: String,
    /// The line itself.
    pub text: String,
}

/// A scene entry: a single line or an ordered list of variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SceneEntry {
    /// Exactly one line.
    Single(SceneLine),
    /// Ordered variants; one is picked per resolution.
    Variants(Vec<SceneLine>),
}

impl SceneEntry {
    /// The entry's lines as a slice, regardless of shape.
    pub fn lines(&self) -> &[SceneLine] {
        match self {
            Self::Single(line) => std::slice::from_ref(line),
            Self::Variants(lines) => lines,
        }
    }
}

/// Scene content keyed by dot-separated path (e.g. `barkeep.serve`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenePool {
    entries: HashMap<String, SceneEntry>,
}

impl ScenePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at a path.
    pub fn insert(&mut self, path: impl Into<String>, entry: SceneEntry) {
        self.entries.insert(path.into(), entry);
    }

    /// The line variants at a path, if the path exists.
    pub fn lines(&self, path: &str) -> Option<&[SceneLine]> {
        self.entries.get(path).map(SceneEntry::lines)
    }

    /// Whether a path exists in the pool.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Short reaction lines keyed by pool name (`serve_success`, `thanks`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarkPool {
    pools: HashMap<String, Vec<String>>,
}

impl BarkPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pool of variants under a key.
    pub fn insert(&mut self, key: impl Into<String>, lines: Vec<String>) {
        self.pools.insert(key.into(), lines);
    }

    /// The variants under a key, if the key exists.
    pub fn lines(&self, key: &str) -> Option<&[String]> {
        self.pools.get(key).map(Vec::as_slice)
    }

    /// Whether a key exists in the pool.
    pub fn contains(&self, key: &str) -> bool {
        self.pools.contains_key(key)
    }
}
