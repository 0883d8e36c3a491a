//! Scene resolution: one variant per content key, picked by the session RNG.

use rw_core::content::{SceneLine, ScenePool};
use rw_core::rng::Mulberry32;

/// Resolve a content path to one line variant.
///
/// List entries pick index `floor(unit * len)` from the shared stream;
/// single entries draw from the stream the same way so resolution order
/// alone determines stream position. Returns `None` for an absent path —
/// the caller reports it and the tick carries on.
pub fn resolve<'a>(pool: &'a ScenePool, rng: &mut Mulberry32, path: &str) -> Option<&'a SceneLine> {
    let lines = pool.lines(path)?;
    rng.pick(lines)
}
