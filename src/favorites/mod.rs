//! The user's favorites list, kept as one JSON array under a fixed key in a
//! [`KeyValueStore`].
//!
//! Every operation is a full read-modify-write of that array. There is one
//! logical caller at a time; nothing makes the cycle atomic across processes.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::errors::{ClientResult, StoreError};
use schema::FavoriteEntry;
use tracing::debug;

/// Key the favorites array is stored under.
pub const FAVORITES_KEY: &str = "pokemonFavorites";

#[derive(Debug)]
pub struct FavoritesStore<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All favorites in insertion order. A missing key reads as an empty list.
    pub async fn list(&self) -> ClientResult<Vec<FavoriteEntry>> {
        match self.store.get(FAVORITES_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json).map_err(StoreError::from)?),
            None => Ok(Vec::new()),
        }
    }

    /// Appends `entry` and returns the updated list. Duplicates are not
    /// prevented; use [`FavoritesStore::toggle`] for that.
    pub async fn add(&self, entry: FavoriteEntry) -> ClientResult<Vec<FavoriteEntry>> {
        let mut favorites = self.list().await?;
        debug!(id = entry.id, name = %entry.name, "adding favorite");
        favorites.push(entry);
        self.save(&favorites).await?;
        Ok(favorites)
    }

    /// Removes every entry with `id` and returns the updated list. Removing an
    /// absent id leaves the stored list untouched.
    pub async fn remove(&self, id: u32) -> ClientResult<Vec<FavoriteEntry>> {
        let mut favorites = self.list().await?;
        let before = favorites.len();
        favorites.retain(|favorite| favorite.id != id);
        if favorites.len() != before {
            debug!(id, "removed favorite");
            self.save(&favorites).await?;
        }
        Ok(favorites)
    }

    pub async fn find(&self, id: u32) -> ClientResult<Option<FavoriteEntry>> {
        Ok(self.list().await?.into_iter().find(|favorite| favorite.id == id))
    }

    pub async fn contains(&self, id: u32) -> ClientResult<bool> {
        Ok(self.find(id).await?.is_some())
    }

    /// Removes `entry.id` if it is a favorite, otherwise adds `entry`.
    /// Returns whether the entity is a favorite afterwards.
    pub async fn toggle(&self, entry: FavoriteEntry) -> ClientResult<bool> {
        if self.contains(entry.id).await? {
            self.remove(entry.id).await?;
            Ok(false)
        } else {
            self.add(entry).await?;
            Ok(true)
        }
    }

    /// Deletes the whole list.
    pub async fn clear(&self) -> ClientResult<()> {
        self.store.remove(FAVORITES_KEY).await?;
        Ok(())
    }

    async fn save(&self, favorites: &[FavoriteEntry]) -> ClientResult<()> {
        let json = serde_json::to_string(favorites).map_err(StoreError::from)?;
        self.store.set(FAVORITES_KEY, json).await?;
        Ok(())
    }
}
