use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let (world, _) = super::load_world(world)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Exits", "Items", "Characters"]);

    for section in world.sections() {
        let exits: Vec<String> = section
            .links()
            .map(|(direction, other)| format!("{direction}: {}", world[other].name()))
            .collect();
        let items: Vec<&str> = section.items().iter().map(|i| i.name()).collect();
        let characters: Vec<String> = section
            .characters()
            .iter()
            .map(|c| format!("{} ({})", c.name(), c.kind().label()))
            .collect();

        table.add_row(vec![
            section.name().to_string(),
            or_dash(exits.join(", ")),
            or_dash(items.join(", ")),
            or_dash(characters.join(", ")),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} sections", world.len());

    Ok(())
}

fn or_dash(text: String) -> String {
    if text.is_empty() { "—".to_string() } else { text }
}
