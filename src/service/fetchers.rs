//! Sub-resource fetchers.
//!
//! Each fetcher performs one lookup and maps the response into a schema record.
//! Failures stop here: a fetcher never returns an error, it returns the
//! documented default for its resource and names the part it degraded.

use super::evolution::reconcile_chain;
use super::PokedexService;
use crate::api::resource_id;
use crate::api::wire::{
    NamedResource, RawAbility, RawAbilitySlot, RawCharacteristic, RawEncounter,
    RawEvolutionChain, RawSpecies, RawStat, RawStatSlot,
};
use crate::locale::{clean_text, select_entry, select_text, select_text_or, PLACEHOLDER};
use schema::{
    AbilityRecord, DegradedPart, EncounterDetail, EncounterRecord, EvolutionNode, SpeciesRecord,
    SpeciesValue, StatFamily, StatRecord, VersionEncounters,
};
use tracing::{debug, warn};

pub const SHORT_PLACEHOLDER: &str = "Short description unavailable";
pub const LOAD_FAILED: &str = "Failed to load description";
pub const UNKNOWN: &str = "Unknown";

/// A value that may hold defaults in place of data that failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub value: T,
    pub degraded: Vec<DegradedPart>,
}

impl<T> Fetched<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            degraded: Vec::new(),
        }
    }

    pub fn fallback(value: T, part: DegradedPart) -> Self {
        Self {
            value,
            degraded: vec![part],
        }
    }

    /// Moves the degraded parts into `sink` and returns the value.
    pub fn unpack(self, sink: &mut Vec<DegradedPart>) -> T {
        sink.extend(self.degraded);
        self.value
    }
}

impl PokedexService {
    pub async fn fetch_ability(&self, slot: &RawAbilitySlot) -> Fetched<AbilityRecord> {
        let name = slot.ability.name.clone();
        match self.api.get_json::<RawAbility>(&slot.ability.url).await {
            Ok(raw) => {
                let locales = &self.config.locales;
                let entries = &raw.effect_entries;
                Fetched::ok(AbilityRecord {
                    effect: select_text(entries, locales, |e| e.effect.as_deref()),
                    short_effect: select_text_or(
                        entries,
                        locales,
                        |e| e.short_effect.as_deref(),
                        SHORT_PLACEHOLDER,
                    ),
                    is_hidden: slot.is_hidden,
                    name,
                })
            }
            Err(e) => {
                warn!(ability = %name, error = %e, "ability lookup failed, using defaults");
                Fetched::fallback(
                    AbilityRecord {
                        name: name.clone(),
                        effect: LOAD_FAILED.to_string(),
                        short_effect: PLACEHOLDER.to_string(),
                        is_hidden: slot.is_hidden,
                    },
                    DegradedPart::Ability(name),
                )
            }
        }
    }

    pub async fn fetch_stat(&self, slot: &RawStatSlot) -> Fetched<StatRecord> {
        let name = slot.stat.name.clone();
        let max_value = StatFamily::of(&name).nominal_max();
        match self.api.get_json::<RawStat>(&slot.stat.url).await {
            Ok(raw) => {
                let display_name = select_entry(&raw.names, &self.config.locales)
                    .and_then(|entry| entry.name.clone())
                    .unwrap_or_else(|| name.clone());
                Fetched::ok(StatRecord {
                    name,
                    display_name,
                    value: slot.base_stat,
                    effort: slot.effort,
                    max_value,
                })
            }
            Err(e) => {
                warn!(stat = %name, error = %e, "stat lookup failed, using defaults");
                Fetched::fallback(
                    StatRecord {
                        display_name: name.clone(),
                        name: name.clone(),
                        value: slot.base_stat,
                        effort: slot.effort,
                        max_value,
                    },
                    DegradedPart::Stat(name),
                )
            }
        }
    }

    /// Fetches species data and, concurrently, the characteristic and evolution
    /// chain that hang off it.
    pub async fn fetch_species(&self, id: u32) -> Fetched<SpeciesRecord> {
        let url = self.api.endpoints().species(id);
        let raw: RawSpecies = match self.api.get_json(&url).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(id, error = %e, "species lookup failed, using defaults");
                return Fetched::fallback(default_species(), DegradedPart::Species);
            }
        };

        let chain_id = raw
            .evolution_chain
            .as_ref()
            .and_then(|chain| resource_id(&chain.url));
        let (characteristic, evolution_chain) = tokio::join!(
            self.fetch_characteristic(id),
            async {
                match chain_id {
                    Some(chain_id) => self.fetch_evolution_chain(chain_id).await,
                    None => Fetched::ok(None),
                }
            }
        );

        let mut degraded = Vec::new();
        let characteristic = characteristic.unpack(&mut degraded);
        let evolution_chain = evolution_chain.unpack(&mut degraded);

        let description = select_text(&raw.flavor_text_entries, &self.config.locales, |e| {
            e.flavor_text.as_deref()
        });
        let name_or_unknown = |resource: &Option<NamedResource>| {
            resource
                .as_ref()
                .map(|r| r.name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string())
        };

        Fetched {
            value: SpeciesRecord {
                description,
                habitat: name_or_unknown(&raw.habitat),
                generation: raw
                    .generation
                    .as_ref()
                    .map_or_else(|| UNKNOWN.to_string(), |g| generation_label(&g.name)),
                color: name_or_unknown(&raw.color),
                growth_rate: name_or_unknown(&raw.growth_rate),
                base_happiness: raw.base_happiness.into(),
                capture_rate: raw.capture_rate.into(),
                is_legendary: raw.is_legendary,
                is_mythical: raw.is_mythical,
                characteristic,
                evolution_chain,
            },
            degraded,
        }
    }

    /// A missing characteristic is normal for most entities and is not
    /// reported as degraded; any other failure is.
    pub async fn fetch_characteristic(&self, id: u32) -> Fetched<Option<String>> {
        let url = self.api.endpoints().characteristic(id);
        match self.api.get_json::<RawCharacteristic>(&url).await {
            Ok(raw) => Fetched::ok(
                select_entry(&raw.descriptions, &self.config.locales)
                    .and_then(|entry| entry.description.as_deref())
                    .map(clean_text),
            ),
            Err(e) if e.is_not_found() => {
                debug!(id, "no characteristic");
                Fetched::ok(None)
            }
            Err(e) => {
                warn!(id, error = %e, "characteristic lookup failed");
                Fetched::fallback(None, DegradedPart::Characteristic)
            }
        }
    }

    pub async fn fetch_evolution_chain(&self, chain_id: &str) -> Fetched<Option<EvolutionNode>> {
        let url = self.api.endpoints().evolution_chain(chain_id);
        match self.api.get_json::<RawEvolutionChain>(&url).await {
            Ok(raw) => Fetched::ok(Some(reconcile_chain(&raw.chain))),
            Err(e) => {
                warn!(chain_id, error = %e, "evolution chain lookup failed");
                Fetched::fallback(None, DegradedPart::EvolutionChain)
            }
        }
    }

    /// Where the entity can be encountered. Non-critical: any failure yields an
    /// empty list.
    pub async fn fetch_encounters(&self, id: u32) -> Vec<EncounterRecord> {
        let url = self.api.endpoints().encounters(id);
        match self.api.get_json::<Vec<RawEncounter>>(&url).await {
            Ok(raw) => raw.into_iter().map(encounter_record).collect(),
            Err(e) => {
                warn!(id, error = %e, "encounter lookup failed");
                Vec::new()
            }
        }
    }
}

/// Species record used when the species lookup itself fails.
pub fn default_species() -> SpeciesRecord {
    SpeciesRecord {
        description: LOAD_FAILED.to_string(),
        habitat: UNKNOWN.to_string(),
        generation: UNKNOWN.to_string(),
        color: UNKNOWN.to_string(),
        growth_rate: UNKNOWN.to_string(),
        base_happiness: SpeciesValue::Unknown,
        capture_rate: SpeciesValue::Unknown,
        is_legendary: false,
        is_mythical: false,
        characteristic: None,
        evolution_chain: None,
    }
}

/// "generation-iv" -> "iv". A name with nothing after the prefix is unknown.
pub fn generation_label(name: &str) -> String {
    let label = name.strip_prefix("generation-").unwrap_or(name);
    if label.is_empty() {
        UNKNOWN.to_string()
    } else {
        label.to_string()
    }
}

fn encounter_record(raw: RawEncounter) -> EncounterRecord {
    EncounterRecord {
        location: raw.location_area.name.replace('-', " "),
        versions: raw
            .version_details
            .into_iter()
            .map(|version| VersionEncounters {
                version: version.version.name,
                max_chance: version.max_chance,
                details: version
                    .encounter_details
                    .into_iter()
                    .map(|detail| EncounterDetail {
                        method: detail.method.name,
                        chance: detail.chance,
                        min_level: detail.min_level,
                        max_level: detail.max_level,
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_label_strips_prefix() {
        assert_eq!(generation_label("generation-i"), "i");
        assert_eq!(generation_label("generation-viii"), "viii");
        assert_eq!(generation_label("galar"), "galar");
    }

    #[test]
    fn test_generation_label_without_number_is_unknown() {
        assert_eq!(generation_label(""), UNKNOWN);
        assert_eq!(generation_label("generation-"), UNKNOWN);
    }

    #[test]
    fn test_default_species_is_fully_populated() {
        let species = default_species();
        assert_eq!(species.description, LOAD_FAILED);
        assert_eq!(species.habitat, UNKNOWN);
        assert_eq!(species.capture_rate, SpeciesValue::Unknown);
        assert!(species.evolution_chain.is_none());
    }

    #[test]
    fn test_unpack_moves_degraded_parts() {
        let mut sink = vec![DegradedPart::Species];
        let value = Fetched::fallback(7, DegradedPart::Stat("hp".to_string())).unpack(&mut sink);
        assert_eq!(value, 7);
        assert_eq!(
            sink,
            vec![DegradedPart::Species, DegradedPart::Stat("hp".to_string())]
        );
        assert!(Fetched::ok(()).degraded.is_empty());
    }
}
