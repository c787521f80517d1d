//! HTTP client for the Mastodon REST API.
//!
//! One request per call, no retries. Non-success responses become errors
//! carrying whatever message the instance put in its JSON body.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::{AppConfig, HttpConfig};
use crate::error::{HomefeedError, Result};
use crate::mastodon::types::{
    ApiError, AppCredentials, Status, TokenResponse, OOB_REDIRECT_URI, SCOPE,
};

/// Build the URL of the instance's OAuth authorize page.
pub fn authorization_url(instance: &str, client_id: &str) -> String {
    build_authorization_url(&format!("https://{instance}"), client_id)
}

fn build_authorization_url(base_url: &str, client_id: &str) -> String {
    format!(
        "{base_url}/oauth/authorize?client_id={}&scope={SCOPE}&redirect_uri={OOB_REDIRECT_URI}&response_type=code",
        urlencoding::encode(client_id)
    )
}

/// Client bound to a single instance.
pub struct MastodonClient {
    client: Client,
    base_url: String,
}

impl MastodonClient {
    /// Create a client for `https://<instance>`.
    pub fn new(instance: &str, config: &HttpConfig) -> Result<Self> {
        Self::with_base_url(format!("https://{instance}"), config)
    }

    /// Create a client for an explicit base URL (scheme and host, no path).
    pub fn with_base_url(base_url: impl Into<String>, config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register this tool as an OAuth application with `read` scope.
    pub async fn register_app(&self, app: &AppConfig) -> Result<AppCredentials> {
        let url = format!("{}/api/v1/apps", self.base_url);
        debug!("registering application at {}", url);

        let form = [
            ("client_name", app.client_name.as_str()),
            ("redirect_uris", OOB_REDIRECT_URI),
            ("scopes", SCOPE),
            ("website", app.website.as_str()),
        ];
        let response = self.client.post(&url).form(&form).send().await?;
        read_json(response).await
    }

    /// The authorize page for this client's instance.
    pub fn authorization_url(&self, client_id: &str) -> String {
        build_authorization_url(&self.base_url, client_id)
    }

    /// Exchange an authorization code for an access token.
    pub async fn obtain_token(&self, credentials: &AppCredentials, code: &str) -> Result<String> {
        let url = format!("{}/oauth/token", self.base_url);
        debug!("exchanging authorization code at {}", url);

        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("redirect_uri", OOB_REDIRECT_URI),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("scope", SCOPE),
        ];
        let response = self.client.post(&url).form(&form).send().await?;
        let token: TokenResponse = read_json(response).await?;
        Ok(token.access_token)
    }

    /// Fetch the first page of the home timeline.
    ///
    /// Any status other than 200 is reported as [`HomefeedError::Instance`]
    /// with the body's `error` field, or the bare status code when the body
    /// carries none.
    pub async fn home_timeline(&self, access_token: &str) -> Result<Vec<Status>> {
        let url = format!("{}/api/v1/timelines/home", self.base_url);
        debug!("fetching home timeline from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status != StatusCode::OK {
            let message = serde_json::from_slice::<ApiError>(&bytes)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| status.as_u16().to_string());
            return Err(HomefeedError::Instance(message));
        }

        let statuses: Vec<Status> = serde_json::from_slice(&bytes)?;
        info!("fetched {} statuses", statuses.len());
        Ok(statuses)
    }
}

/// Decode a successful JSON response, or turn a failure into `Api`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ApiError>(&bytes)
            .ok()
            .and_then(|body| body.error_description.or(body.error))
            .unwrap_or_else(|| status.to_string());
        return Err(HomefeedError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
