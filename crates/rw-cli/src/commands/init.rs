use std::path::Path;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{name}' already exists"));
    }

    rw_content::write_template(dir).map_err(|e| e.to_string())?;

    println!("Created bar '{name}' in {name}/");
    println!("  inventory.json  — stock and recipes");
    println!("  scenes.json     — scene lines by divert path");
    println!("  barks.json      — reducer bark pools");
    println!("  trees/          — one behavior tree per actor");
    println!();
    println!("Get started:");
    println!("  cd {name}");
    println!("  redwood check          # Validate the content");
    println!("  redwood play -d .      # Play an interactive session");

    Ok(())
}
