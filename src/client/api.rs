use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::session::Session;

fn default_timeout_in_ms() -> u64 {
    3000
}

/// The config needed to reach the backend REST API.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. "http://localhost:8080/api".
    pub url: String,

    /// Per-request timeout. The client must never hang on a dead backend.
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
}

/// Ways a backend call can fail. A rejected credential pair is its own
/// variant so callers can tell "wrong password" from "backend broken".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("credentials were rejected")]
    InvalidCredentials,

    #[error("unexpected status code: {0}")]
    Status(reqwest::StatusCode),

    #[error("error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error parsing response body: {0}")]
    Body(#[from] serde_json::Error),
}

/// The credential pair posted to the login endpoint.
#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// The body the login endpoint answers with on success.
#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// Anything that can exchange a credential pair for a bearer token.
#[async_trait::async_trait]
pub trait LoginProvider: Send + Sync {
    async fn login(&self, login: &str, password: &str) -> Result<String, ApiError>;
}

/// A thin client for the backend REST API. It obtains tokens and attaches
/// them to outgoing requests; it never interprets the academic entities
/// behind the endpoints.
pub struct ApiClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        info!("Creating API client for '{}'", config.url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            config: config.clone(),
            client,
        }
    }

    /// Builds a request for a backend path with the session's bearer token
    /// attached when there is one. The caller sends it and interprets the
    /// response.
    pub fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.url, path);
        let builder = self.client.request(method, &url);
        match session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[async_trait::async_trait]
impl LoginProvider for ApiClient {
    /// Posts the credential pair to the login endpoint and returns the
    /// issued token. The token is opaque here; decoding it is the session's
    /// job.
    async fn login(&self, login: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/login", self.config.url);
        debug!("Sending login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { login, password })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            let parsed: LoginResponse = serde_json::from_str(&body)?;
            info!("Login accepted for '{}'", login);
            Ok(parsed.token)
        } else if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            debug!("Login rejected for '{}'", login);
            Err(ApiError::InvalidCredentials)
        } else {
            Err(ApiError::Status(status))
        }
    }
}
