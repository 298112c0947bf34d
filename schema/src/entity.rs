use crate::SpeciesRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Nominal maximum for the hit-points stat family.
pub const HP_NOMINAL_MAX: u16 = 714;
/// Nominal maximum for every other stat family.
pub const STAT_NOMINAL_MAX: u16 = 614;

/// One fully denormalized catalog entry, as consumed by every screen.
///
/// Records are rebuilt wholesale on every fetch. Non-optional fields always hold
/// either fetched data or a documented fallback; `degraded` lists the parts that
/// hold fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,                   // Canonical lowercase name
    pub image: String,                  // Official artwork, else the default front sprite
    pub types: Vec<String>,             // Category tags in slot order
    pub height: u32,                    // Tenths of a metre
    pub weight: u32,                    // Tenths of a kilogram
    pub abilities: Vec<AbilityRecord>,
    pub stats: Vec<StatRecord>,
    pub sprites: SpriteSet,
    pub species: Option<SpeciesRecord>,
    #[serde(default)]
    pub degraded: Vec<DegradedPart>,
}

impl EntityRecord {
    /// True when every sub-resource was fetched rather than defaulted.
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn stat(&self, name: &str) -> Option<&StatRecord> {
        self.stats.iter().find(|s| s.name == name)
    }

    /// Sum of all base stat values.
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.value as u32).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub name: String,
    pub effect: String,
    pub short_effect: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub name: String,
    pub display_name: String,
    pub value: u16,
    pub effort: u16,
    pub max_value: u16,
}

/// Which nominal-maximum family a stat belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatFamily {
    HitPoints,
    Battle,
}

impl StatFamily {
    pub fn of(stat_name: &str) -> Self {
        if stat_name == "hp" {
            StatFamily::HitPoints
        } else {
            StatFamily::Battle
        }
    }

    /// Presentation hint for bar scaling, not a hard bound.
    pub fn nominal_max(self) -> u16 {
        match self {
            StatFamily::HitPoints => HP_NOMINAL_MAX,
            StatFamily::Battle => STAT_NOMINAL_MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SpriteKind {
    #[strum(to_string = "Front")]
    Front,
    #[strum(to_string = "Back")]
    Back,
    #[strum(to_string = "Shiny front")]
    FrontShiny,
    #[strum(to_string = "Shiny back")]
    BackShiny,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub front: Option<String>,
    pub back: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
}

impl SpriteSet {
    pub fn get(&self, kind: SpriteKind) -> Option<&str> {
        match kind {
            SpriteKind::Front => self.front.as_deref(),
            SpriteKind::Back => self.back.as_deref(),
            SpriteKind::FrontShiny => self.front_shiny.as_deref(),
            SpriteKind::BackShiny => self.back_shiny.as_deref(),
        }
    }

    /// Iterates the sprites that are present, in display order.
    pub fn present(&self) -> impl Iterator<Item = (SpriteKind, &str)> + '_ {
        SpriteKind::iter().filter_map(move |kind| self.get(kind).map(|url| (kind, url)))
    }
}

/// A part of an [`EntityRecord`] that holds a fallback because its lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegradedPart {
    Ability(String),
    Stat(String),
    Species,
    Characteristic,
    EvolutionChain,
}

impl fmt::Display for DegradedPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradedPart::Ability(name) => write!(f, "ability '{}'", name),
            DegradedPart::Stat(name) => write!(f, "stat '{}'", name),
            DegradedPart::Species => write!(f, "species data"),
            DegradedPart::Characteristic => write!(f, "characteristic"),
            DegradedPart::EvolutionChain => write!(f, "evolution chain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_family_nominal_max() {
        assert_eq!(StatFamily::of("hp").nominal_max(), 714);
        assert_eq!(StatFamily::of("speed").nominal_max(), 614);
        assert_eq!(StatFamily::of("special-attack").nominal_max(), 614);
    }

    #[test]
    fn test_sprite_set_present_skips_missing() {
        let sprites = SpriteSet {
            front: Some("front.png".to_string()),
            back: None,
            front_shiny: None,
            back_shiny: Some("back_shiny.png".to_string()),
        };
        let present: Vec<_> = sprites.present().collect();
        assert_eq!(
            present,
            vec![
                (SpriteKind::Front, "front.png"),
                (SpriteKind::BackShiny, "back_shiny.png")
            ]
        );
        assert_eq!(SpriteKind::FrontShiny.to_string(), "Shiny front");
    }

    #[test]
    fn test_degraded_part_display() {
        assert_eq!(
            DegradedPart::Ability("static".to_string()).to_string(),
            "ability 'static'"
        );
        assert_eq!(DegradedPart::EvolutionChain.to_string(), "evolution chain");
    }
}
