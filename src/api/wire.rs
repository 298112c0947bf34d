//! Typed shapes of the REST API's JSON responses.
//!
//! Only the fields the aggregation layer reads are declared. Anything the API
//! may omit or null out is an `Option` or defaulted, so decoding succeeds on
//! partial payloads and defaults are decided by the fetchers, not by serde.

use crate::locale::LocalizedEntry;
use serde::Deserialize;

/// A `{ name, url }` reference to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A `{ url }` reference without a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiResource {
    #[serde(default)]
    pub url: String,
}

// --- /pokemon?offset&limit, /type ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResourceList {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

// --- /pokemon/{nameOrId} ---

#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: RawSprites,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    pub stats: Vec<RawStatSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: RawOtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

impl RawSprites {
    /// Official artwork when available, else the default front sprite.
    pub fn primary_image(&self) -> Option<&str> {
        self.other
            .official_artwork
            .as_ref()
            .and_then(|art| art.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStatSlot {
    pub stat: NamedResource,
    #[serde(default)]
    pub base_stat: u16,
    #[serde(default)]
    pub effort: u16,
}

// --- /ability/{ref} ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAbility {
    #[serde(default)]
    pub effect_entries: Vec<RawEffectEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEffectEntry {
    pub effect: Option<String>,
    pub short_effect: Option<String>,
    pub language: NamedResource,
}

impl LocalizedEntry for RawEffectEntry {
    fn language(&self) -> &str {
        &self.language.name
    }
}

// --- /stat/{ref} ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStat {
    #[serde(default)]
    pub names: Vec<RawName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawName {
    pub name: Option<String>,
    pub language: NamedResource,
}

impl LocalizedEntry for RawName {
    fn language(&self) -> &str {
        &self.language.name
    }
}

// --- /pokemon-species/{id} ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpecies {
    #[serde(default)]
    pub flavor_text_entries: Vec<RawFlavorText>,
    pub habitat: Option<NamedResource>,
    pub generation: Option<NamedResource>,
    pub color: Option<NamedResource>,
    pub growth_rate: Option<NamedResource>,
    pub base_happiness: Option<u16>,
    pub capture_rate: Option<u16>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub evolution_chain: Option<ApiResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFlavorText {
    pub flavor_text: Option<String>,
    pub language: NamedResource,
}

impl LocalizedEntry for RawFlavorText {
    fn language(&self) -> &str {
        &self.language.name
    }
}

// --- /characteristic/{id} ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCharacteristic {
    #[serde(default)]
    pub descriptions: Vec<RawDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDescription {
    pub description: Option<String>,
    pub language: NamedResource,
}

impl LocalizedEntry for RawDescription {
    fn language(&self) -> &str {
        &self.language.name
    }
}

// --- /evolution-chain/{id} ---

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvolutionChain {
    pub chain: RawChainLink,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<RawChainLink>,
}

// --- /type/{tag} ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTypeMembers {
    #[serde(default)]
    pub pokemon: Vec<RawTypeMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeMember {
    pub pokemon: NamedResource,
}

// --- /pokemon/{id}/encounters ---

#[derive(Debug, Clone, Deserialize)]
pub struct RawEncounter {
    pub location_area: NamedResource,
    #[serde(default)]
    pub version_details: Vec<RawVersionEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVersionEncounter {
    pub version: NamedResource,
    #[serde(default)]
    pub max_chance: u16,
    #[serde(default)]
    pub encounter_details: Vec<RawEncounterDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEncounterDetail {
    pub method: NamedResource,
    #[serde(default)]
    pub chance: u16,
    #[serde(default)]
    pub min_level: u8,
    #[serde(default)]
    pub max_level: u8,
}
