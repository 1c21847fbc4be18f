/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Token lifecycle for the skills API
//!
//! This module handles:
//! - Client-credentials token acquisition
//! - Token validation by probing the API
//! - In-place token replacement on refresh

use crate::application::config::Config;
use crate::constants::TOKEN_CHECK_ENDPOINT;
use crate::error::AppError;
use crate::model::auth::{AccessToken, TokenResponse};
use crate::model::http::{HttpRequest, HttpTransport, RequestBody};
use reqwest::Method;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Owns the credentials and the current bearer token
pub struct Auth {
    config: Arc<Config>,
    transport: Arc<dyn HttpTransport>,
    token: RwLock<Option<AccessToken>>,
}

impl Auth {
    /// Creates an Auth instance with no token yet
    pub fn new(config: Arc<Config>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            transport,
            token: RwLock::new(None),
        }
    }

    /// Acquires a token and checks that the API accepts it
    ///
    /// A rejected token request fails immediately without probing.
    pub async fn login(&self) -> Result<AccessToken, AppError> {
        if self.config.credentials.is_incomplete() {
            warn!("Client credentials are blank, the token request will most likely be rejected");
        }

        let token = self.request_token().await?;
        self.store(token.clone()).await;

        if !self.validate_token().await? {
            error!("Token issued by the auth server was rejected by the skills API");
            return Err(AppError::Unauthorized);
        }

        info!("✓ Login successful, scope: {}", self.config.auth.scope);
        Ok(token)
    }

    /// Replaces the current token with a freshly issued one
    pub async fn refresh_token(&self) -> Result<AccessToken, AppError> {
        info!("Refreshing access token");
        let token = self.request_token().await?;
        self.store(token.clone()).await;
        info!("✓ Token refreshed successfully");
        Ok(token)
    }

    /// Checks the current token against the API
    ///
    /// Any non-success status counts as invalid, not just 401/403. Transport
    /// failures are returned as errors.
    pub async fn validate_token(&self) -> Result<bool, AppError> {
        let Some(bearer) = self.bearer().await else {
            return Ok(false);
        };

        let request = HttpRequest::new(Method::GET, self.config.endpoint_url(TOKEN_CHECK_ENDPOINT))
            .bearer(&bearer);
        let response = self.transport.send(request).await?;

        debug!("Token check answered {}", response.status);
        Ok(response.is_success())
    }

    /// Current bearer string, if a token has been issued
    pub async fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    /// Current token, if any
    pub async fn token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Sends the client-credentials grant
    async fn request_token(&self) -> Result<AccessToken, AppError> {
        let credentials = &self.config.credentials;
        let form = vec![
            ("grant_type".to_string(), "client_credentials".to_string()),
            ("client_id".to_string(), credentials.client_id.clone()),
            ("client_secret".to_string(), credentials.client_secret.clone()),
            ("scope".to_string(), self.config.auth.scope.clone()),
        ];

        debug!("Requesting token from: {}", self.config.auth.token_url);

        let request = HttpRequest::new(Method::POST, self.config.auth.token_url.clone())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(RequestBody::Form(form));
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            error!(
                "Token request failed with status {}: {}",
                response.status,
                response.text()
            );
            return Err(AppError::Unauthorized);
        }

        let token = response
            .parse_json::<TokenResponse>()
            .map_err(|e| AppError::TokenResponse(e.to_string()))?
            .into_token()?;
        debug!("Token issued, nominal lifetime {} seconds", token.expires_in);
        Ok(token)
    }

    async fn store(&self, token: AccessToken) {
        let mut current = self.token.write().await;
        *current = Some(token);
    }
}
