//! Local filesystem favorites store.
//!
//! Persists the favorites slot as a JSON array of decimal-integer
//! strings in a single file. Writes are atomic (temp file + rename).

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::FavoritesStore;

/// File-backed favorites store.
#[derive(Debug, Clone)]
pub struct LocalFavoritesStore {
    path: PathBuf,
}

impl LocalFavoritesStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Read bytes, returning None if the slot doesn't exist yet.
    async fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl FavoritesStore for LocalFavoritesStore {
    async fn load(&self) -> Result<HashSet<u32>> {
        let Some(bytes) = self.read_bytes().await? else {
            log::debug!("No favorites slot at {}", self.path.display());
            return Ok(HashSet::new());
        };

        let entries: Vec<String> = serde_json::from_slice(&bytes)?;
        let mut favorites = HashSet::with_capacity(entries.len());
        for entry in entries {
            let id = entry
                .parse::<u32>()
                .map_err(|e| AppError::corrupt_favorites(entry.as_str(), e))?;
            favorites.insert(id);
        }
        Ok(favorites)
    }

    async fn save(&self, favorites: &HashSet<u32>) -> Result<()> {
        // Sorted for a stable file; the set itself carries no order.
        let mut ids: Vec<u32> = favorites.iter().copied().collect();
        ids.sort_unstable();
        let entries: Vec<String> = ids.iter().map(u32::to_string).collect();

        let bytes = serde_json::to_vec_pretty(&entries)?;
        self.write_bytes(&bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(tmp: &TempDir) -> LocalFavoritesStore {
        LocalFavoritesStore::new(tmp.path().join("favorites.json"))
    }

    #[tokio::test]
    async fn missing_slot_loads_as_empty_set() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let favorites = store.load().await.unwrap();
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let favorites: HashSet<u32> = [1, 25, 150].into_iter().collect();
        store.save(&favorites).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, favorites);
    }

    #[tokio::test]
    async fn save_is_a_full_rewrite() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        store.save(&[1, 2, 3].into_iter().collect()).await.unwrap();
        store.save(&[7].into_iter().collect()).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, [7].into_iter().collect());
    }

    #[tokio::test]
    async fn slot_is_a_list_of_decimal_strings() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        store.save(&[25, 1].into_iter().collect()).await.unwrap();

        let content = std::fs::read_to_string(tmp.path().join("favorites.json")).unwrap();
        let entries: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(entries, vec!["1".to_string(), "25".to_string()]);
    }

    #[tokio::test]
    async fn non_integer_entry_is_corruption() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        std::fs::write(tmp.path().join("favorites.json"), r#"["1", "pikachu"]"#).unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, AppError::CorruptFavorites { .. }));
    }

    #[tokio::test]
    async fn empty_set_saves_and_loads() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        store.save(&HashSet::new()).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }
}
