// src/services/mod.rs

//! Fetch client and feed controller services.

pub mod feed;
pub mod fetch;

pub use feed::FeedController;
pub use fetch::{CreatureSource, FetchOutcome, PokeClient};
