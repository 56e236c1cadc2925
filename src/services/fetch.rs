// src/services/fetch.rs

//! Remote fetch client.
//!
//! Issues one HTTP GET per creature id and maps the response through
//! the record mapper. Failures never propagate to the caller; they are
//! folded into a [`FetchOutcome`] so the feed controller can keep its
//! cursor moving.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Creature, RawCreature};
use crate::utils::http;

/// Result of a single fetch attempt.
///
/// `Missing` means the id has no record at the source (HTTP 404);
/// `Failed` is a transport error, unexpected status, or undecodable
/// body. Both append nothing to the feed, but callers and tests can
/// tell them apart.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Creature),
    Missing,
    Failed(AppError),
}

impl FetchOutcome {
    /// The fetched creature, if any.
    pub fn into_creature(self) -> Option<Creature> {
        match self {
            Self::Fetched(creature) => Some(creature),
            Self::Missing | Self::Failed(_) => None,
        }
    }
}

/// Trait for creature sources, so the controller can be driven by a
/// scripted fake in tests.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// Fetch the record for a single id. One request in flight per
    /// invocation; no retry.
    async fn fetch_one(&self, id: u32) -> FetchOutcome;
}

/// HTTP client for the creature API.
pub struct PokeClient {
    client: Client,
    base_url: String,
}

impl PokeClient {
    /// Create a new client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for a single creature id.
    fn request_url(&self, id: u32) -> String {
        format!("{}/{}/", self.base_url, id)
    }

    async fn try_fetch(&self, id: u32) -> Result<Option<Creature>> {
        let url = self.request_url(id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::fetch(id, format!("unexpected status {status}")));
        }

        let raw: RawCreature = response.json().await?;
        Ok(Some(Creature::from_raw(id, raw)))
    }
}

#[async_trait]
impl CreatureSource for PokeClient {
    async fn fetch_one(&self, id: u32) -> FetchOutcome {
        match self.try_fetch(id).await {
            Ok(Some(creature)) => FetchOutcome::Fetched(creature),
            Ok(None) => {
                log::debug!("No record for creature {id}");
                FetchOutcome::Missing
            }
            Err(error) => {
                log::warn!("Fetch for creature {id} failed: {error}");
                FetchOutcome::Failed(error)
            }
        }
    }
}
