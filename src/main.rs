use pokedex_client::mcp_interface::{
    format_collection, format_encounters, format_entity, format_favorites, format_tags,
};
use pokedex_client::{ClientConfig, FavoriteEntry, FavoritesStore, MemoryStore, PokedexService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "pikachu".to_string());

    let service = match PokedexService::new(ClientConfig::default()) {
        Ok(service) => service,
        Err(e) => {
            println!("Error creating client: {}", e);
            return;
        }
    };

    // Example 1: Look up a single entity with everything it references
    let record = match service.fetch_entity(&query).await {
        Ok(record) => record,
        Err(e) => {
            println!("Error loading {}: {}", query, e);
            return;
        }
    };
    println!("{}", format_entity(&record));

    // Example 2: Where it lives in the wild
    let encounters = service.fetch_encounters(record.id).await;
    println!("{}", format_encounters(&record.name, &encounters));

    // Example 3: Every displayable type
    match service.fetch_tag_list().await {
        Ok(tags) => println!("{}\n", format_tags(&tags)),
        Err(e) => println!("Error loading types: {}\n", e),
    }

    // Example 4: The first members of this entity's primary type
    if let Some(primary) = record.types.first() {
        println!("=== {} type ===", primary);
        match service.fetch_by_category(primary).await {
            Ok(records) => println!("{}", format_collection(&records)),
            Err(e) => println!("Error loading {} type: {}", primary, e),
        }
    }

    // Example 5: A throwaway favorites list
    let favorites = FavoritesStore::new(MemoryStore::new());
    let entry = FavoriteEntry::from_entity(&record, "Found by the demo");
    match favorites.add(entry).await {
        Ok(list) => println!("{}", format_favorites(&list)),
        Err(e) => println!("Error saving favorite: {}", e),
    }
}
