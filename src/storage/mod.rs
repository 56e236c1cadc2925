//! Persistence abstractions for the favorites slot.
//!
//! The slot is a single named location holding a flat list of
//! decimal-integer strings, one per favorite creature id. It is read
//! once at session start and rewritten in full on every change.

pub mod local;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalFavoritesStore;

/// Trait for favorites persistence backends.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Load the persisted favorite ids. An absent slot yields the
    /// empty set; an entry that is not a valid integer is corruption
    /// and propagates.
    async fn load(&self) -> Result<HashSet<u32>>;

    /// Overwrite the slot with the full set. No delta writes.
    async fn save(&self, favorites: &HashSet<u32>) -> Result<()>;
}
