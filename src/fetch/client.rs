//! HTTP client for the Brawl Stars API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::{retain_ranked, FetchError, MatchSource, RankingQuery};
use crate::config::RemoteConfig;
use crate::models::{ItemsEnvelope, Player, RawBattleItem, RawBrawler};

/// Authenticated client for the remote ranking service.
pub struct BrawlStarsClient {
    client: Client,
    base_url: Url,
    ranked_only: bool,
}

impl BrawlStarsClient {
    /// Create a client with an explicit bearer token.
    pub fn new(config: &RemoteConfig, token: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FetchError::InvalidHeader(e.to_string()))?,
        );
        if let Some(ip) = &config.forwarded_for {
            headers.insert(
                "X-Forwarded-For",
                HeaderValue::from_str(ip).map_err(|e| FetchError::InvalidHeader(e.to_string()))?,
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            ranked_only: config.ranked_only,
        })
    }

    /// Create a client reading the token from the configured environment variable.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, FetchError> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| FetchError::MissingToken(config.token_env.clone()))?;
        Self::new(config, &token)
    }

    /// Join path segments onto the API root, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET an endpoint and unwrap its `items` array.
    async fn get_items<T: DeserializeOwned>(
        &self,
        url: Url,
        endpoint: &'static str,
    ) -> Result<Vec<T>, FetchError> {
        debug!(%url, "Requesting {}", endpoint);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint, "Remote service returned an error");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: ItemsEnvelope<T> = serde_json::from_str(&body)?;
        envelope.items.ok_or(FetchError::MissingItems { endpoint })
    }
}

#[async_trait]
impl MatchSource for BrawlStarsClient {
    fn name(&self) -> &'static str {
        "brawlstars"
    }

    #[instrument(level = "info", skip(self))]
    async fn battlelog(&self, player_tag: &str) -> Result<Vec<RawBattleItem>, FetchError> {
        let url = self.endpoint(&["players", player_tag, "battlelog"])?;
        let items: Vec<RawBattleItem> = self.get_items(url, "battlelog").await?;
        let fetched = items.len();

        let items = if self.ranked_only {
            retain_ranked(items)
        } else {
            items
        };
        info!(fetched, kept = items.len(), "Fetched battle log");
        Ok(items)
    }

    #[instrument(level = "info", skip(self))]
    async fn brawlers(&self) -> Result<Vec<RawBrawler>, FetchError> {
        let url = self.endpoint(&["brawlers"])?;
        let items: Vec<RawBrawler> = self.get_items(url, "brawlers").await?;
        info!(count = items.len(), "Fetched brawler roster");
        Ok(items)
    }

    #[instrument(level = "info", skip(self))]
    async fn rankings(&self, query: &RankingQuery) -> Result<Vec<Player>, FetchError> {
        let url = self.endpoint(&query.path_segments())?;
        let items: Vec<Player> = self.get_items(url, "rankings").await?;
        info!(count = items.len(), "Fetched ranking");
        Ok(items)
    }
}
