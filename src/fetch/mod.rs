//! Remote ranking service access.
//!
//! [`MatchSource`] is the seam between the HTTP surface and the remote
//! service; [`BrawlStarsClient`] is the production implementation.

mod client;

pub use client::BrawlStarsClient;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Player, RawBattleItem, RawBrawler};

/// Country code used when a ranking query names none.
pub const GLOBAL_RANKING: &str = "global";

/// Errors that can occur while talking to the remote service.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("API token not set: environment variable {0} is empty or missing")]
    MissingToken(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Returned null response from the remote service at {endpoint}")]
    MissingItems { endpoint: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// True when the remote service reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::HttpStatus { status: 404, .. })
    }
}

/// Ranking listing selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingQuery {
    pub country_code: Option<String>,
    pub brawler_id: Option<String>,
}

impl RankingQuery {
    pub fn country_code(&self) -> &str {
        self.country_code
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(GLOBAL_RANKING)
    }

    pub fn brawler_id(&self) -> Option<&str> {
        self.brawler_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Path below the API root: `rankings/{country}/players` or
    /// `rankings/{country}/brawlers/{id}`.
    pub fn path_segments(&self) -> Vec<&str> {
        match self.brawler_id() {
            Some(id) => vec!["rankings", self.country_code(), "brawlers", id],
            None => vec!["rankings", self.country_code(), "players"],
        }
    }
}

/// Source of raw battle logs and listings.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &'static str;

    /// A player's recent battles, most recent first.
    async fn battlelog(&self, player_tag: &str) -> Result<Vec<RawBattleItem>, FetchError>;

    /// The brawler roster.
    async fn brawlers(&self) -> Result<Vec<RawBrawler>, FetchError>;

    /// A player ranking listing.
    async fn rankings(&self, query: &RankingQuery) -> Result<Vec<Player>, FetchError>;
}

/// Keep only ranked and pro-league battles, preserving order.
pub fn retain_ranked(items: Vec<RawBattleItem>) -> Vec<RawBattleItem> {
    items.into_iter().filter(RawBattleItem::is_ranked).collect()
}
