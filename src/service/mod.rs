//! The aggregation layer.
//!
//! [`PokedexService`] turns a name or identifier into one denormalized
//! [`EntityRecord`] by fanning out to the species, ability and stat resources
//! and joining the results. Only the core record lookup can fail a request;
//! every dependent lookup falls back to a documented default and is listed on
//! the record's `degraded` parts.

pub mod collections;
pub mod evolution;
pub mod fetchers;

#[cfg(test)]
mod tests;

pub use fetchers::Fetched;

use crate::api::wire::{RawPokemon, RawTypeSlot};
use crate::api::{ApiClient, HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use futures::future::join_all;
use schema::{EntityRecord, SpriteSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Entry point for every catalog read. Holds no caches: each call is
/// self-contained and repeating it re-reads the API.
#[derive(Debug, Clone)]
pub struct PokedexService {
    api: ApiClient,
    config: ClientConfig,
}

impl PokedexService {
    /// Builds a service talking to the configured API over HTTPS.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.request_timeout())
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Builds a service over any transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let api = ApiClient::new(transport, &config.base_url);
        Self { api, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches one entity by name or numeric identifier.
    ///
    /// The query is trimmed and lowercased. A blank query is rejected before any
    /// request is made; a failed core lookup yields [`ClientError::NotFound`]
    /// echoing the query as typed.
    pub async fn fetch_entity(&self, query: &str) -> ClientResult<EntityRecord> {
        let normalized = normalize_query(query).ok_or(ClientError::EmptyQuery)?;
        let url = self.api.endpoints().pokemon(&normalized);

        let raw: RawPokemon = self.api.get_json(&url).await.map_err(|reason| {
            warn!(query = %query.trim(), %reason, "core record lookup failed");
            ClientError::NotFound {
                query: query.trim().to_string(),
                reason,
            }
        })?;

        debug!(id = raw.id, name = %raw.name, "core record fetched, fanning out");
        Ok(self.aggregate(raw).await)
    }

    pub async fn fetch_entity_by_id(&self, id: u32) -> ClientResult<EntityRecord> {
        self.fetch_entity(&id.to_string()).await
    }

    /// Joins a core record with its species, abilities and stats.
    async fn aggregate(&self, raw: RawPokemon) -> EntityRecord {
        let (species, abilities, stats) = tokio::join!(
            self.fetch_species(raw.id),
            join_all(raw.abilities.iter().map(|slot| self.fetch_ability(slot))),
            join_all(raw.stats.iter().map(|slot| self.fetch_stat(slot))),
        );

        let mut degraded = Vec::new();
        let abilities = abilities
            .into_iter()
            .map(|fetched| fetched.unpack(&mut degraded))
            .collect();
        let stats = stats
            .into_iter()
            .map(|fetched| fetched.unpack(&mut degraded))
            .collect();
        let species = species.unpack(&mut degraded);

        if !degraded.is_empty() {
            debug!(id = raw.id, parts = degraded.len(), "record assembled with fallbacks");
        }

        EntityRecord {
            id: raw.id,
            image: raw.sprites.primary_image().unwrap_or_default().to_string(),
            types: type_tags(&raw.types),
            height: raw.height,
            weight: raw.weight,
            abilities,
            stats,
            sprites: SpriteSet {
                front: raw.sprites.front_default,
                back: raw.sprites.back_default,
                front_shiny: raw.sprites.front_shiny,
                back_shiny: raw.sprites.back_shiny,
            },
            species: Some(species),
            degraded,
            name: raw.name,
        }
    }
}

/// Category tags ordered by slot; the API does not promise listing order.
fn type_tags(slots: &[RawTypeSlot]) -> Vec<String> {
    let mut slots: Vec<&RawTypeSlot> = slots.iter().collect();
    slots.sort_by_key(|slot| slot.slot);
    slots.into_iter().map(|slot| slot.type_.name.clone()).collect()
}

/// Trims and lowercases a search query; `None` when nothing is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Pikachu "), Some("pikachu".to_string()));
        assert_eq!(normalize_query("25"), Some("25".to_string()));
        assert_eq!(normalize_query(" \t "), None);
    }

    #[test]
    fn test_type_tags_follow_slot_order() {
        let slots: Vec<RawTypeSlot> = serde_json::from_value(serde_json::json!([
            { "slot": 2, "type": { "name": "flying", "url": "" } },
            { "slot": 1, "type": { "name": "fire", "url": "" } },
        ]))
        .unwrap();

        assert_eq!(type_tags(&slots), vec!["fire", "flying"]);
    }
}
