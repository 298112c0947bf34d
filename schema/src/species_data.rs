use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer species attribute that the API may omit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesValue {
    Known(u16),
    Unknown,
}

impl From<Option<u16>> for SpeciesValue {
    fn from(value: Option<u16>) -> Self {
        value.map_or(SpeciesValue::Unknown, SpeciesValue::Known)
    }
}

impl fmt::Display for SpeciesValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesValue::Known(value) => write!(f, "{}", value),
            SpeciesValue::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub description: String,
    pub habitat: String,
    pub generation: String, // "i", "ii", ... with the "generation-" prefix stripped
    pub color: String,
    pub growth_rate: String,
    pub base_happiness: SpeciesValue,
    pub capture_rate: SpeciesValue,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub characteristic: Option<String>,
    pub evolution_chain: Option<EvolutionNode>,
}

/// One stage of an evolution chain. Leaves have no children; a stage with
/// several children branches (e.g. Eevee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub id: String,
    pub name: String,
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn is_leaf(&self) -> bool {
        self.evolves_to.is_empty()
    }

    /// Depth-first search for a stage by species name.
    pub fn find(&self, name: &str) -> Option<&EvolutionNode> {
        if self.name == name {
            return Some(self);
        }
        self.evolves_to.iter().find_map(|child| child.find(name))
    }

    /// Number of stages in the tree, root included.
    pub fn len(&self) -> usize {
        1 + self.evolves_to.iter().map(EvolutionNode::len).sum::<usize>()
    }

    /// Number of levels from the root to the deepest leaf.
    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(EvolutionNode::depth)
            .max()
            .unwrap_or(0)
    }
}
