//! Scaffolding for new content directories.

use std::fs;
use std::path::Path;

use crate::builtin;
use crate::error::{ContentError, ContentResult};

fn write_file(path: &Path, contents: &str) -> ContentResult<()> {
    fs::write(path, contents).map_err(|source| ContentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the builtin content as editable files under `dir`, creating the
/// directory and its `trees/` subdirectory.
pub fn write_template(dir: &Path) -> ContentResult<()> {
    let trees = dir.join("trees");
    fs::create_dir_all(&trees).map_err(|source| ContentError::Write {
        path: trees.clone(),
        source,
    })?;

    write_file(&dir.join("inventory.json"), builtin::INVENTORY)?;
    write_file(&dir.join("scenes.json"), builtin::SCENES)?;
    write_file(&dir.join("barks.json"), builtin::BARKS)?;
    write_file(&trees.join("actors.json"), builtin::ACTORS)?;
    write_file(&trees.join("barkeep.json"), builtin::TREE_BARKEEP)?;
    write_file(&trees.join("guard.json"), builtin::TREE_GUARD)?;
    write_file(&trees.join("stranger.json"), builtin::TREE_STRANGER)?;
    Ok(())
}
