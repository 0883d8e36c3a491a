use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use rw_core::directive::Directive;
use rw_core::snapshot;
use rw_core::world::WorldState;
use rw_engine::Stage;

use super::choices;

pub fn run(dir: Option<&Path>, seed: u32, save: &Path, fresh: bool) -> Result<(), String> {
    let content = super::load_content(dir)?;

    let base = WorldState::new(content.inventory.clone());
    let world = if !fresh && save.exists() {
        let raw = fs::read_to_string(save).map_err(|e| format!("cannot read save: {e}"))?;
        snapshot::restore(&raw, base)
    } else {
        base
    };

    let mut stage = super::build_stage(world, &content, seed)?;

    println!("  {} the Redwood Bar", "Entering".bold());
    println!("  Seed: {seed} | Save: {}", save.display());
    println!("  Pick a number, or 'quit' to leave.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!("  {}", super::hud(stage.world()).dimmed());
        let menu = choices::menu(stage.world());
        for (i, choice) in menu.iter().enumerate() {
            println!("  {}. {}", i + 1, choice.label);
        }

        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(choice) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| menu.get(i))
        else {
            println!("{}\n", format!("no such choice: {input}").yellow());
            continue;
        };

        println!("\n  {} {}", "You:".bold(), choice.label);
        stage.raise(choice.signal);
        let directives = stage.tick();
        render(&mut stage, &directives);
        for note in stage.drain_diagnostics() {
            println!("  {}", format!("({note})").dimmed());
        }
        println!();

        let raw = snapshot::to_json(stage.world()).map_err(|e| e.to_string())?;
        fs::write(save, raw).map_err(|e| format!("cannot write save: {e}"))?;
    }

    println!("  You step back out into the night.");
    Ok(())
}

fn render(stage: &mut Stage, directives: &[Directive]) {
    if directives.is_empty() {
        println!("  {}", "Nobody reacts.".dimmed());
        return;
    }
    for directive in directives {
        match directive {
            Directive::Say { speaker, text } => {
                println!("  {} {text}", format!("{speaker}:").cyan().bold());
            }
            Directive::Divert { path } => {
                if let Some(scene) = stage.resolve_scene(path) {
                    println!("  {} {}", format!("{}:", scene.speaker).green(), scene.text.italic());
                }
            }
        }
    }
}
