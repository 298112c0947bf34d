use crate::EntityRecord;
use serde::{Deserialize, Serialize};

/// A frozen snapshot of an entity saved by the user. It is never refreshed
/// from the API once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl FavoriteEntry {
    pub fn from_entity(record: &EntityRecord, notes: impl Into<String>) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            image: record.image.clone(),
            notes: notes.into(),
            types: record.types.clone(),
        }
    }
}
