//! Scripted, non-interactive sessions.
//!
//! Output is plain text with no color so two runs with the same seed and
//! choice list produce byte-identical transcripts.

use std::path::Path;

use rw_core::directive::Directive;
use rw_core::world::WorldState;

use super::choices;

pub fn run(dir: Option<&Path>, seed: u32, script: &str) -> Result<(), String> {
    let content = super::load_content(dir)?;
    let world = WorldState::new(content.inventory.clone());
    let mut stage = super::build_stage(world, &content, seed)?;

    for id in script.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        let choice = choices::by_id(id).ok_or_else(|| format!("unknown choice: {id}"))?;

        println!("> {}", choice.label);
        stage.raise(choice.signal);
        for directive in stage.tick() {
            match directive {
                Directive::Say { speaker, text } => println!("{speaker}: {text}"),
                Directive::Divert { path } => {
                    if let Some(scene) = stage.resolve_scene(&path) {
                        println!("{}: {}", scene.speaker, scene.text);
                    }
                }
            }
        }
        for note in stage.drain_diagnostics() {
            println!("({note})");
        }
        println!();
    }

    println!("{}", super::hud(stage.world()));
    Ok(())
}
