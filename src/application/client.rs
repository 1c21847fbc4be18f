/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Authenticated session for the skills API
//!
//! ```ignore
//! use skills_client::prelude::*;
//!
//! let client = SkillsClient::new(Config::new()).await?;
//! let types: SkillTypesResponse = client.list_skill_types(None).await?.parse_json()?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::skills::SkillsService;
use crate::error::AppError;
use crate::model::http::{HttpRequest, HttpTransport, ReqwestTransport, RequestBody, Response};
use crate::model::requests::{Payload, RequestDescriptor};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Skills API session
///
/// Holds the credentials and the bearer token, and dispatches endpoint calls.
/// A failed call triggers one token refresh and one replay of the same request,
/// but only when the token no longer validates.
pub struct SkillsClient {
    auth: Arc<Auth>,
    transport: Arc<dyn HttpTransport>,
    config: Arc<Config>,
}

impl SkillsClient {
    /// Creates a session and authenticates immediately
    ///
    /// # Errors
    /// [`AppError::Unauthorized`] when the credentials are rejected or the issued
    /// token fails validation.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let transport = Arc::new(ReqwestTransport::new(config.rest_api.timeout)?);
        Self::with_transport(config, transport).await
    }

    /// Creates a session over a caller supplied transport and authenticates immediately
    pub async fn with_transport(
        config: Config,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone(), transport.clone()));

        auth.login().await?;

        Ok(Self {
            auth,
            transport,
            config,
        })
    }

    /// Sends a request, refreshing the token and replaying it once if needed
    ///
    /// Non-success responses are returned, not turned into errors. The replay
    /// sends the full original descriptor, body and query included.
    pub async fn dispatch(&self, descriptor: &RequestDescriptor) -> Result<Response, AppError> {
        let response = self.send(descriptor).await?;

        if response.is_success() {
            return Ok(response);
        }

        if self.auth.validate_token().await? {
            debug!(
                "{} {} failed with {} but the token is valid, not retrying",
                descriptor.method(),
                descriptor.endpoint,
                response.status
            );
            return Ok(response);
        }

        warn!(
            "{} {} failed with {} and the token no longer validates, refreshing and retrying",
            descriptor.method(),
            descriptor.endpoint,
            response.status
        );
        self.auth.refresh_token().await?;
        self.send(descriptor).await
    }

    /// Whether the current token is accepted by the API
    pub async fn is_valid_token(&self) -> Result<bool, AppError> {
        self.auth.validate_token().await
    }

    /// Current bearer string
    pub async fn token(&self) -> Option<String> {
        self.auth.bearer().await
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying token manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    async fn send(&self, descriptor: &RequestDescriptor) -> Result<Response, AppError> {
        let bearer = self.auth.bearer().await.ok_or(AppError::Unauthorized)?;
        let url = self.config.endpoint_url(&descriptor.endpoint);

        let mut request = HttpRequest::new(descriptor.method(), url)
            .bearer(&bearer)
            .query(descriptor.query_params().to_vec());

        if let Payload::Json { body, .. } = &descriptor.payload {
            request = request
                .header("Content-Type", "application/json")
                .body(RequestBody::Json(body.clone()));
        }

        self.transport.send(request).await
    }

    fn version<'a>(&'a self, version: Option<&'a str>) -> &'a str {
        self.config.version_or_default(version)
    }
}

#[async_trait]
impl SkillsService for SkillsClient {
    async fn list_versions(&self) -> Result<Response, AppError> {
        self.dispatch(&RequestDescriptor::list_versions()).await
    }

    async fn list_all_skills(&self, version: Option<&str>) -> Result<Response, AppError> {
        let version = self.version(version);
        info!("Listing all skills for version {}", version);
        self.dispatch(&RequestDescriptor::list_all_skills(version)?)
            .await
    }

    async fn search_skills(
        &self,
        search_string: Option<&str>,
        type_id: Option<&str>,
        version: Option<&str>,
    ) -> Result<Response, AppError> {
        let descriptor =
            RequestDescriptor::search_skills(self.version(version), search_string, type_id)?;
        self.dispatch(&descriptor).await
    }

    async fn get_skill_by_id(
        &self,
        skill_id: &str,
        version: Option<&str>,
    ) -> Result<Response, AppError> {
        self.dispatch(&RequestDescriptor::get_skill_by_id(
            self.version(version),
            skill_id,
        )?)
        .await
    }

    async fn list_skill_types(&self, version: Option<&str>) -> Result<Response, AppError> {
        self.dispatch(&RequestDescriptor::list_skill_types(self.version(version))?)
            .await
    }

    async fn extract_skills(
        &self,
        text: &str,
        version: Option<&str>,
    ) -> Result<Response, AppError> {
        let response = self
            .dispatch(&RequestDescriptor::extract_skills(
                self.version(version),
                text,
                false,
            )?)
            .await?;
        log_quota(&response);
        Ok(response)
    }

    async fn extract_skills_with_source(
        &self,
        text: &str,
        version: Option<&str>,
    ) -> Result<Response, AppError> {
        let response = self
            .dispatch(&RequestDescriptor::extract_skills(
                self.version(version),
                text,
                true,
            )?)
            .await?;
        log_quota(&response);
        Ok(response)
    }
}

fn log_quota(response: &Response) {
    if let Some(quota) = response.rate_limit() {
        debug!(
            "Extraction quota remaining: {:?}, resets: {:?}",
            quota.remaining, quota.reset
        );
    }
}
