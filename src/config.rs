use crate::error::{ApiError, Result};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::{Position, Url};

/// Environment variable holding the server base URL
pub const ENV_SERVER_URL: &str = "CONTACT_CENTER_SERVER_URL";
/// Environment variable holding the mobile API key
pub const ENV_API_KEY: &str = "CONTACT_CENTER_API_KEY";
/// Environment variable enabling response body logging
pub const ENV_DEBUG: &str = "CONTACT_CENTER_DEBUG";

/// Create the HTTP session shared by every call made through one client.
///
/// Only the connect phase is bounded; requests themselves run with the
/// transport defaults.
pub fn create_http_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .pool_max_idle_per_host(16)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

/// Configuration for the contact center API client
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// API host, optionally with port and path prefix
    pub host: String,
    /// Key sent as `mobile_api_key` with every request
    pub api_key: String,
    /// Maximum time to establish a connection
    pub connect_timeout: Duration,
    /// Log raw response bodies
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "https".to_string(),
            host: "localhost".to_string(),
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with the given scheme, host and API key
    pub fn new(scheme: String, host: String, api_key: String) -> Self {
        Config {
            scheme,
            host,
            api_key,
            ..Config::default()
        }
    }

    /// Create a configuration from a base URL such as `https://example.com:8443`
    pub fn from_url(server_url: &str, api_key: String) -> Result<Self> {
        let parsed = Url::parse(server_url).map_err(|source| ApiError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ApiError::UnsupportedScheme(other.to_string())),
        }

        let host = parsed[Position::BeforeHost..Position::AfterPath]
            .trim_end_matches('/')
            .to_string();

        Ok(Config::new(parsed.scheme().to_string(), host, api_key))
    }

    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup(ENV_SERVER_URL).ok_or(ApiError::MissingConfig(ENV_SERVER_URL))?;
        let api_key = lookup(ENV_API_KEY).ok_or(ApiError::MissingConfig(ENV_API_KEY))?;
        let debug = lookup(ENV_DEBUG)
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Config::from_url(&server_url, api_key)?.with_debug(debug))
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = api_key;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Get the full URL of an API endpoint, e.g. `endpoint_url("/api/jwt")`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}
