use serde::{Deserialize, Serialize};

/// Where an entity can be found in the wild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRecord {
    pub location: String, // Location area with hyphens turned into spaces
    pub versions: Vec<VersionEncounters>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounters {
    pub version: String,
    pub max_chance: u16,
    pub details: Vec<EncounterDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterDetail {
    pub method: String,
    pub chance: u16,
    pub min_level: u8,
    pub max_level: u8,
}
