use std::path::Path;

use colored::Colorize;

pub fn run(dir: &Path) -> Result<(), String> {
    let content = rw_content::load_dir(dir).map_err(|e| e.to_string())?;

    let findings = rw_content::check(&content);
    if !findings.is_empty() {
        for finding in &findings {
            eprintln!("  {} {finding}", "warning:".yellow().bold());
        }
        return Err(format!(
            "{} finding{}",
            findings.len(),
            if findings.len() == 1 { "" } else { "s" }
        ));
    }

    println!("  All checks passed.");
    println!(
        "  {} recipes, {} scenes, {} actors",
        content.inventory.recipes.len(),
        content.scenes.len(),
        content.trees.len()
    );

    Ok(())
}
