// src/models/mod.rs

//! Domain models for the feed application.

mod config;
mod creature;

// Re-export all public types
pub use config::{ApiConfig, Config, FeedConfig, StorageConfig};
pub use creature::{Creature, RawCreature};
