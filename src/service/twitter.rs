//! Twitter Spaces lookup.
//!
//! Only the single endpoint the bot needs is wrapped: Spaces by creator, with the `state`
//! field requested so live Spaces can be told apart from scheduled or ended ones.

use serde::Deserialize;
use serenity::async_trait;

use crate::{config::Config, error::AppError, model::twitter_space::TwitterSpace};

/// Looks up the Spaces hosted by a Twitter account.
#[async_trait]
pub trait TwitterSpacesApi: Send + Sync {
    /// Returns the Spaces created by the account, in API order.
    ///
    /// # Arguments
    /// - `twitter_user_id` - Numeric Twitter account ID as a string
    ///
    /// # Returns
    /// - `Ok(Vec<TwitterSpace>)` - Possibly empty list of Spaces
    /// - `Err(AppError)` - Network failure or non-success API response
    async fn spaces_by_creator(&self, twitter_user_id: &str) -> Result<Vec<TwitterSpace>, AppError>;
}

#[derive(Debug, Deserialize)]
struct SpacesLookupResponse {
    #[serde(default)]
    data: Option<Vec<TwitterSpace>>,
    #[serde(default)]
    meta: Option<SpacesLookupMeta>,
}

#[derive(Debug, Deserialize)]
struct SpacesLookupMeta {
    result_count: u64,
}

/// Twitter API v2 client authenticated with an app bearer token.
pub struct TwitterClient {
    http: reqwest::Client,
    api_url: String,
    bearer_token: String,
}

impl TwitterClient {
    /// Creates a new TwitterClient.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client (see `startup::setup_reqwest_client`)
    /// - `api_url` - API base URL without trailing slash
    /// - `bearer_token` - App-only bearer token
    pub fn new(http: reqwest::Client, api_url: String, bearer_token: String) -> Self {
        Self {
            http,
            api_url,
            bearer_token,
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(
            http,
            config.twitter_api_url.clone(),
            config.twitter_bearer_token.clone(),
        )
    }
}

#[async_trait]
impl TwitterSpacesApi for TwitterClient {
    async fn spaces_by_creator(&self, twitter_user_id: &str) -> Result<Vec<TwitterSpace>, AppError> {
        let response = self
            .http
            .get(format!("{}/2/spaces/by/creator_ids", self.api_url))
            .bearer_auth(&self.bearer_token)
            .query(&[("user_ids", twitter_user_id), ("space.fields", "state")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::TwitterApi {
                status: status.as_u16(),
                body,
            });
        }

        let lookup: SpacesLookupResponse = response.json().await?;

        if lookup.meta.is_some_and(|meta| meta.result_count == 0) {
            return Ok(Vec::new());
        }

        Ok(lookup.data.unwrap_or_default())
    }
}
