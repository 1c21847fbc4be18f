use crate::constants::{
    DEFAULT_AUTH_URL, DEFAULT_BASE_URL, DEFAULT_SCOPE, DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION,
};
use crate::utils::config::{get_env_or_default, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Client credentials issued by the API provider
pub struct Credentials {
    /// OAuth client identifier
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
}

impl Credentials {
    /// Creates a credential pair
    ///
    /// # Arguments
    ///
    /// * `client_id` - OAuth client identifier
    /// * `client_secret` - OAuth client secret
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// True when either half is blank
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.client_id.trim().is_empty() || self.client_secret.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Token endpoint settings
pub struct AuthConfig {
    /// Client-credentials token endpoint
    pub token_url: String,
    /// Scope requested with the token
    pub scope: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the skills API
    pub base_url: String,
    /// Timeout in seconds for a single request
    pub timeout: u64,
    /// Classification version used when a call does not name one
    pub default_version: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the skills client
pub struct Config {
    /// Client credentials
    pub credentials: Credentials,
    /// Token endpoint settings
    pub auth: AuthConfig,
    /// REST API settings
    pub rest_api: RestApiConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("credentials", &self.credentials)
            .field("auth", &self.auth)
            .field("rest_api", &self.rest_api)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_AUTH_URL.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            default_version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from a `.env` file and the environment
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `SKILLS_CLIENT_ID` | required |
    /// | `SKILLS_CLIENT_SECRET` | required |
    /// | `SKILLS_AUTH_URL` | `https://auth.emsicloud.com/connect/token` |
    /// | `SKILLS_SCOPE` | `emsi_open` |
    /// | `SKILLS_BASE_URL` | `https://skills.emsicloud.com` |
    /// | `SKILLS_REST_TIMEOUT` | `30` |
    /// | `SKILLS_VERSION` | `latest` |
    ///
    /// # Returns
    ///
    /// A configuration that always builds. Missing credentials are left empty
    /// and reported with `error!`; unparsable values fall back to their defaults.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                client_id: get_env_required("SKILLS_CLIENT_ID"),
                client_secret: get_env_required("SKILLS_CLIENT_SECRET"),
            },
            auth: AuthConfig {
                token_url: get_env_or_default("SKILLS_AUTH_URL", DEFAULT_AUTH_URL.to_string()),
                scope: get_env_or_default("SKILLS_SCOPE", DEFAULT_SCOPE.to_string()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("SKILLS_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("SKILLS_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                default_version: get_env_or_default(
                    "SKILLS_VERSION",
                    DEFAULT_VERSION.to_string(),
                ),
            },
        }
    }

    /// Builds a configuration from explicit credentials and default endpoints
    ///
    /// The environment is not consulted.
    ///
    /// # Arguments
    ///
    /// * `client_id` - OAuth client identifier
    /// * `client_secret` - OAuth client secret
    pub fn with_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::new(client_id, client_secret),
            auth: AuthConfig::default(),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Points both the token endpoint and the API at another host
    ///
    /// The token endpoint becomes `{auth_base}/connect/token`.
    ///
    /// # Arguments
    ///
    /// * `auth_base` - Scheme and host of the token server, trailing slash optional
    /// * `api_base` - Base URL of the skills API, trailing slash optional
    #[must_use]
    pub fn with_endpoints(mut self, auth_base: &str, api_base: &str) -> Self {
        self.auth.token_url = format!("{}/connect/token", auth_base.trim_end_matches('/'));
        self.rest_api.base_url = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for an endpoint relative to the API base
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Relative path such as `versions/latest/types`, or an
    ///   absolute `http(s)` URL which is returned unchanged
    ///
    /// # Returns
    ///
    /// The base URL and the endpoint joined by exactly one `/`
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            return endpoint.to_string();
        }
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Version to use when a call passes `None`
    ///
    /// # Arguments
    ///
    /// * `version` - Version named by the caller, if any
    ///
    /// # Returns
    ///
    /// `version` when given, otherwise `rest_api.default_version`
    #[must_use]
    pub fn version_or_default<'a>(&'a self, version: Option<&'a str>) -> &'a str {
        version.unwrap_or(&self.rest_api.default_version)
    }
}
