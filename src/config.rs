use url::Url;

use crate::error::{config::ConfigError, AppError};

const TWITTER_API_URL: &str = "https://api.twitter.com";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    pub twitter_bearer_token: String,
    pub twitter_api_url: String,
    pub twitter_claim_page: String,
    pub twitter_link_page: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and URLs valid
    /// - `Err(AppError::ConfigErr)` - Missing variable or invalid URL
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let twitter_api_url =
            lookup("TWITTER_API_URL").unwrap_or_else(|| TWITTER_API_URL.to_string());

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            twitter_bearer_token: require("TWITTER_BEARER_TOKEN")?,
            twitter_api_url: validate_url("TWITTER_API_URL", twitter_api_url)?,
            twitter_claim_page: validate_url("TWITTER_CLAIM_PAGE", require("TWITTER_CLAIM_PAGE")?)?,
            twitter_link_page: validate_url("TWITTER_LINK_PAGE", require("TWITTER_LINK_PAGE")?)?,
        })
    }
}

/// Checks that a configured value is an absolute URL and strips any trailing slash so
/// paths can be appended with a single `/`.
fn validate_url(name: &str, value: String) -> Result<String, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidUrl {
        name: name.to_string(),
        value: value.clone(),
        source: e,
    })?;

    Ok(value.trim_end_matches('/').to_string())
}
