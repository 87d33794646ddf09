use std::path::Path;

use colored::Colorize;

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let blueprint = super::load_blueprint(world)?;
    let (world, start) = blueprint.build().map_err(|e| e.to_string())?;

    let characters: usize = world.sections().map(|s| s.characters().len()).sum();
    let items: usize = world.sections().map(|s| s.items().len()).sum();

    println!(
        "  {} sections, {} links, {} items, {} characters",
        world.len(),
        blueprint.links.len(),
        items,
        characters
    );
    println!("  start: {}", world[start].name().bold());

    let unlinked: Vec<&str> = world
        .sections()
        .filter(|s| s.id() != start && s.links().next().is_none())
        .map(|s| s.name())
        .collect();
    if !unlinked.is_empty() {
        println!(
            "  {} unlinked: {}",
            "warning:".yellow(),
            unlinked.join(", ")
        );
    }

    println!("  {}", "All checks passed.".green());
    Ok(())
}
