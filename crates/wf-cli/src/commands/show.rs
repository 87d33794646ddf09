use std::path::Path;

use colored::Colorize;

pub fn run(world: Option<&Path>, name: &str) -> Result<(), String> {
    let (world, _) = super::load_world(world)?;

    let id = world
        .find(name)
        .ok_or_else(|| format!("section not found: \"{name}\""))?;
    let section = &world[id];

    println!("  {}", section.name().bold());
    println!();
    if !section.description().is_empty() {
        println!("  {}", section.description());
        println!();
    }

    for (direction, other) in section.links() {
        println!("  {:<6} {}", direction.to_string().dimmed(), world[other].name());
    }

    if !section.items().is_empty() {
        println!();
        println!("  {}", "Items".underline());
        for item in section.items() {
            println!("    {} - {}", item.name().bold(), item.description());
        }
    }

    if !section.characters().is_empty() {
        println!();
        println!("  {}", "Characters".underline());
        for character in section.characters() {
            println!(
                "    {} [{}]",
                character.name().bold(),
                character.kind().label().dimmed()
            );
            for line in character.greeting().lines() {
                println!("      {line}");
            }
            for trade in character.sells() {
                println!(
                    "      sells {} for {}",
                    trade.item.name(),
                    trade.exchanged_for.name()
                );
            }
        }
    }

    Ok(())
}
