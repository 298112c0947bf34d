//! Plain-text renderers for the MCP server and the demo binary.
//!
//! Every function here takes already-fetched records and returns display text;
//! none of them perform I/O.

use crate::errors::ClientError;
use schema::{
    EncounterRecord, EntityRecord, EvolutionNode, FavoriteEntry, SpeciesRecord, StatRecord,
};

const BAR_WIDTH: usize = 20;

/// Capitalizes each hyphen- or space-separated word: `special-attack` becomes
/// `Special Attack`.
pub fn display_name(raw: &str) -> String {
    raw.split(|c| c == '-' || c == ' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A fixed-width bar scaled against the stat's nominal maximum. Values above
/// the maximum fill the bar.
pub fn stat_bar(stat: &StatRecord) -> String {
    let max = stat.max_value.max(1) as usize;
    let filled = (stat.value as usize * BAR_WIDTH / max).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Full details of one entity.
pub fn format_entity(record: &EntityRecord) -> String {
    let mut output = format!("--- #{:03} {} ---\n", record.id, display_name(&record.name));

    let types: Vec<String> = record.types.iter().map(|t| display_name(t)).collect();
    output.push_str(&format!("Types: {}\n", types.join(" / ")));
    output.push_str(&format!(
        "Height: {:.1} m   Weight: {:.1} kg\n",
        record.height as f32 / 10.0,
        record.weight as f32 / 10.0
    ));
    if !record.image.is_empty() {
        output.push_str(&format!("Image: {}\n", record.image));
    }

    if let Some(species) = &record.species {
        output.push('\n');
        output.push_str(&format_species(species, &record.name));
    }

    output.push_str("\nAbilities:\n");
    for ability in &record.abilities {
        let hidden = if ability.is_hidden { " (hidden)" } else { "" };
        output.push_str(&format!(
            "  {}{}: {}\n",
            display_name(&ability.name),
            hidden,
            ability.short_effect
        ));
    }

    output.push_str("\nBase Stats:\n");
    for stat in &record.stats {
        output.push_str(&format!(
            "  {:<17} {:>3} {}\n",
            stat.display_name,
            stat.value,
            stat_bar(stat)
        ));
    }
    output.push_str(&format!("  {:<17} {:>3}\n", "Total", record.base_stat_total()));

    let sprites: Vec<String> = record
        .sprites
        .present()
        .map(|(kind, url)| format!("  {}: {}", kind, url))
        .collect();
    if !sprites.is_empty() {
        output.push_str("\nSprites:\n");
        output.push_str(&sprites.join("\n"));
        output.push('\n');
    }

    if !record.is_complete() {
        output.push('\n');
        output.push_str(&format_degraded_note(record));
    }
    output
}

fn format_species(species: &SpeciesRecord, name: &str) -> String {
    let mut output = format!("{}\n", species.description);
    if let Some(characteristic) = &species.characteristic {
        output.push_str(&format!("Characteristic: {}\n", characteristic));
    }
    output.push_str(&format!(
        "Generation {} | Habitat: {} | Color: {} | Growth: {}\n",
        species.generation.to_uppercase(),
        display_name(&species.habitat),
        display_name(&species.color),
        display_name(&species.growth_rate)
    ));
    output.push_str(&format!(
        "Base happiness: {} | Capture rate: {}\n",
        species.base_happiness, species.capture_rate
    ));
    if species.is_legendary {
        output.push_str("Legendary\n");
    } else if species.is_mythical {
        output.push_str("Mythical\n");
    }
    if let Some(chain) = &species.evolution_chain {
        if chain.is_leaf() {
            output.push_str("Does not evolve.\n");
        } else {
            output.push_str(&format!("Evolution ({} stages):\n", chain.len()));
            let current = chain.find(name).map(|node| node.id.as_str());
            format_chain(chain, 1, current, &mut output);
        }
    }
    output
}

fn format_chain(node: &EvolutionNode, depth: usize, current: Option<&str>, output: &mut String) {
    let marker = if current == Some(node.id.as_str()) { " <" } else { "" };
    output.push_str(&format!(
        "{}{} (#{}){}\n",
        "  ".repeat(depth),
        display_name(&node.name),
        node.id,
        marker
    ));
    for child in &node.evolves_to {
        format_chain(child, depth + 1, current, output);
    }
}

/// Lists the parts of a record that hold fallbacks.
pub fn format_degraded_note(record: &EntityRecord) -> String {
    let parts: Vec<String> = record.degraded.iter().map(|p| p.to_string()).collect();
    format!("Note: some details could not be loaded ({}).\n", parts.join(", "))
}

/// One line per entity, as shown in a list or category screen.
pub fn format_collection(records: &[EntityRecord]) -> String {
    if records.is_empty() {
        return "No Pokémon to show.".to_string();
    }
    let mut output = String::new();
    for record in records {
        let types: Vec<String> = record.types.iter().map(|t| display_name(t)).collect();
        let marker = if record.is_complete() { "" } else { " *" };
        output.push_str(&format!(
            "#{:03} {:<14} {}{}\n",
            record.id,
            display_name(&record.name),
            types.join("/"),
            marker
        ));
    }
    if records.iter().any(|r| !r.is_complete()) {
        output.push_str("(* some details could not be loaded)\n");
    }
    output
}

pub fn format_tags(tags: &[String]) -> String {
    let names: Vec<String> = tags.iter().map(|t| display_name(t)).collect();
    format!("Types: {}", names.join(", "))
}

pub fn format_favorites(favorites: &[FavoriteEntry]) -> String {
    if favorites.is_empty() {
        return "You have no favorites yet.".to_string();
    }
    let mut output = String::from("--- Favorites ---\n");
    for (i, favorite) in favorites.iter().enumerate() {
        output.push_str(&format!(
            " {}. #{:03} {}",
            i + 1,
            favorite.id,
            display_name(&favorite.name)
        ));
        if !favorite.types.is_empty() {
            let types: Vec<String> = favorite.types.iter().map(|t| display_name(t)).collect();
            output.push_str(&format!(" ({})", types.join("/")));
        }
        output.push('\n');
        if !favorite.notes.is_empty() {
            output.push_str(&format!("    \"{}\"\n", favorite.notes));
        }
    }
    output
}

pub fn format_encounters(name: &str, encounters: &[EncounterRecord]) -> String {
    if encounters.is_empty() {
        return format!("{} is not found in the wild.", display_name(name));
    }
    let mut output = format!("--- Where to find {} ---\n", display_name(name));
    for encounter in encounters {
        output.push_str(&format!("{}\n", display_name(&encounter.location)));
        for version in &encounter.versions {
            let methods: Vec<String> = version
                .details
                .iter()
                .map(|d| {
                    format!(
                        "{} {}% Lv.{}-{}",
                        display_name(&d.method),
                        d.chance,
                        d.min_level,
                        d.max_level
                    )
                })
                .collect();
            output.push_str(&format!(
                "  {} (up to {}%): {}\n",
                display_name(&version.version),
                version.max_chance,
                methods.join("; ")
            ));
        }
    }
    output
}

/// User-facing text for a failed request.
pub fn format_error(error: &ClientError) -> String {
    format!("Error: {}", error)
}
