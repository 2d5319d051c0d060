use crate::config::{create_http_client, Config};
use crate::conversation::QueuedConversation;
use crate::error::Result;
use crate::request::{build_request, Params};
use crate::response::{decode_conversation_queue, decode_user, decode_whisper_info, WhisperInfo};
use crate::user::NexmoUser;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, debug_span, warn, Instrument};
use uuid::Uuid;

/// Endpoint issuing a JWT for a user
pub const TOKEN_PATH: &str = "/api/jwt";
/// Endpoint returning the ids needed to whisper to an agent
pub const WHISPER_PATH: &str = "/api/whisper";
/// Endpoint listing conversations waiting for an agent
pub const QUEUE_PATH: &str = "/api/queue";

/// Client for the contact center API.
///
/// Owns one HTTP session. Clones share that session and the configuration,
/// so construct one client at startup and hand clones to whoever needs it.
/// Every operation resolves exactly once, either with the decoded value or
/// with an [`ApiError`](crate::ApiError).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<Config>,
}

impl ApiClient {
    /// Create a new client with its own HTTP session
    pub fn new(config: Config) -> Result<Self> {
        let client = create_http_client(&config)?;
        Ok(Self::with_http_client(config, client))
    }

    /// Create a new client on top of an existing HTTP session
    pub fn with_http_client(config: Config, client: Client) -> Self {
        ApiClient {
            client,
            config: Arc::new(config),
        }
    }

    /// Create a client configured from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request a JWT for `user_name`
    pub async fn fetch_token(&self, user_name: &str) -> Result<NexmoUser> {
        let mut params = self.base_params();
        params.insert("user_name".to_string(), user_name.to_string());
        self.call(TOKEN_PATH, &params, decode_user).await
    }

    /// Fetch the conversation and leg ids for the current call whisper
    pub async fn fetch_whisper_info(&self) -> Result<WhisperInfo> {
        self.call(WHISPER_PATH, &self.base_params(), decode_whisper_info)
            .await
    }

    /// List the conversations waiting in the queue.
    ///
    /// Malformed entries are skipped rather than failing the whole fetch.
    pub async fn fetch_conversation_queue(&self) -> Result<Vec<QueuedConversation>> {
        self.call(QUEUE_PATH, &self.base_params(), decode_conversation_queue)
            .await
    }

    fn base_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("mobile_api_key".to_string(), self.config.api_key.clone());
        params
    }

    /// Build, send and decode one request
    async fn call<T>(&self, path: &str, params: &Params, decode: fn(&[u8]) -> Result<T>) -> Result<T> {
        let call_id = Uuid::new_v4();
        let span = debug_span!("api_call", %call_id, endpoint = path);

        async {
            let request = build_request(&self.config.endpoint_url(path), params)?;
            debug!(content_length = request.content_length(), "dispatching request");

            let response = self.client.execute(request.into_request()).await.map_err(|e| {
                warn!(error = %e, "transport failure");
                e
            })?;

            let status = response.status();
            if !status.is_success() {
                warn!(%status, "server returned non-success status");
            }

            let body = response.bytes().await?;
            if self.config.debug {
                debug!(%status, body = %String::from_utf8_lossy(&body), "response received");
            } else {
                debug!(%status, len = body.len(), "response received");
            }

            decode(&body).map_err(|e| {
                warn!(error = %e, "failed to decode response");
                e
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn config(host: &str) -> Config {
        Config::new("http".to_string(), host.to_string(), "key-123".to_string())
    }

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new(config("localhost:8080")).unwrap();
        assert_eq!(client.config().base_url(), "http://localhost:8080");
        assert_eq!(client.config().api_key, "key-123");
    }

    #[test]
    fn test_clones_share_configuration() {
        let client = ApiClient::new(config("localhost:8080")).unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.config, &clone.config));
    }

    #[test]
    fn test_base_params_carry_api_key() {
        let client = ApiClient::new(config("localhost:8080")).unwrap();
        let params = client.base_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params["mobile_api_key"], "key-123");
    }

    #[tokio::test]
    async fn test_invalid_host_fails_before_dispatch() {
        let client = ApiClient::new(config("bad host with spaces")).unwrap();
        let err = client.fetch_whisper_info().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
        assert!(err.is_pre_send());
    }
}
