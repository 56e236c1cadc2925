// src/services/feed.rs

//! Feed controller.
//!
//! Owns the append-only feed, the monotonic fetch cursor, the
//! favorites set, and the at-most-one-batch-in-flight guard. All state
//! is driven from a single logical task; methods take `&mut self` and
//! each fetch in a batch is awaited before the next begins, so feed
//! append order always equals cursor order.

use std::collections::HashSet;

use crate::error::Result;
use crate::models::{Creature, FeedConfig};
use crate::services::fetch::{CreatureSource, FetchOutcome};
use crate::storage::FavoritesStore;

/// Controller for the vertically-swipeable creature feed.
pub struct FeedController<S, F> {
    source: S,
    store: F,
    config: FeedConfig,

    feed: Vec<Creature>,
    favorites: HashSet<u32>,
    cursor: u32,
    loading: bool,
}

impl<S, F> FeedController<S, F>
where
    S: CreatureSource,
    F: FavoritesStore,
{
    /// Create a controller with an empty feed and cursor at 0, so the
    /// first batch requests ids 1..=batch_size.
    pub fn new(source: S, store: F, config: FeedConfig) -> Self {
        Self {
            source,
            store,
            config,
            feed: Vec::new(),
            favorites: HashSet::new(),
            cursor: 0,
            loading: false,
        }
    }

    /// Load the persisted favorites into memory. Called once at
    /// session start; a corrupt slot propagates.
    pub async fn init(&mut self) -> Result<()> {
        self.favorites = self.store.load().await?;
        log::info!("Loaded {} favorite(s)", self.favorites.len());
        Ok(())
    }

    /// Fetch the next batch of creatures and append the hits.
    ///
    /// No-op if a batch is already in flight. The cursor advances by
    /// exactly `batch_size` whether or not the individual fetches
    /// produce a record, so a run of missing ids shrinks the visible
    /// feed without stalling the cursor.
    pub async fn load_more(&mut self) {
        if self.loading {
            log::debug!("load_more ignored: batch already in flight");
            return;
        }
        self.loading = true;

        for _ in 0..self.config.batch_size {
            self.cursor += 1;
            match self.source.fetch_one(self.cursor).await {
                FetchOutcome::Fetched(creature) => self.feed.push(creature),
                FetchOutcome::Missing => {
                    log::debug!("Creature {} not found, skipping", self.cursor)
                }
                FetchOutcome::Failed(error) => {
                    log::warn!("Creature {} dropped from feed: {}", self.cursor, error)
                }
            }
        }

        self.loading = false;
    }

    /// Flip membership of `id` in the favorites set and persist the
    /// full set write-through. The in-memory set is the session's
    /// source of truth: a failed save is logged, not rolled back.
    /// Returns the new membership state.
    pub async fn toggle_favorite(&mut self, id: u32) -> bool {
        let now_favorite = self.favorites.insert(id);
        if !now_favorite {
            self.favorites.remove(&id);
        }

        if let Err(error) = self.store.save(&self.favorites).await {
            log::warn!("Failed to persist favorites: {error}");
        }
        now_favorite
    }

    /// The current feed, in append order.
    pub fn creatures(&self) -> &[Creature] {
        &self.feed
    }

    /// Whether a batch fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether `id` is currently a favorite.
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// The fetched creatures marked as favorites, in feed order.
    pub fn favorites(&self) -> Vec<&Creature> {
        self.feed
            .iter()
            .filter(|c| self.favorites.contains(&c.id))
            .collect()
    }

    /// Last id requested from the source.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Whether viewing `visible_index` should trigger the next batch.
    ///
    /// Fires once the viewed position is within `prefetch_threshold`
    /// items of the end of the feed (0 = only at the last item).
    pub fn should_load_more(&self, visible_index: usize) -> bool {
        if self.loading {
            return false;
        }
        if self.feed.is_empty() {
            return true;
        }
        let remaining = self.feed.len().saturating_sub(visible_index + 1);
        remaining <= self.config.prefetch_threshold
    }
}
