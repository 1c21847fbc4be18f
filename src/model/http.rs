/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! HTTP transport seam
//!
//! Every exchange the client performs (token requests, validation checks and
//! endpoint calls) goes through [`HttpTransport::send`]. The production
//! implementation is [`ReqwestTransport`]; tests plug in their own.

use crate::constants::{RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER, USER_AGENT};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Body attached to an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// JSON document
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs
    Form(Vec<(String, String)>),
}

/// Fully resolved request handed to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    /// Extra headers as (name, value) pairs
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to the URL
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

impl HttpRequest {
    /// Creates a request with no headers, query or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds the `Authorization: Bearer` header
    #[must_use]
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Replaces the query parameters
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Replaces the body
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Looks up a header value, case-insensitively
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Quota information attached to extraction responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests left in the current quota period
    pub remaining: Option<u64>,
    /// When the quota resets, as sent by the server
    pub reset: Option<String>,
}

/// Raw HTTP response, decoupled from the transport that produced it
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body decoded as UTF-8, lossy
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON
    pub fn parse_json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turns a non-success response into [`AppError::Unexpected`]
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::Unexpected(self.status))
        }
    }

    /// Quota headers, present on extraction responses
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitInfo> {
        let header = |name: &str| {
            self.headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        let remaining = header(RATE_LIMIT_REMAINING_HEADER);
        let reset = header(RATE_LIMIT_RESET_HEADER);
        if remaining.is_none() && reset.is_none() {
            return None;
        }
        Some(RateLimitInfo {
            remaining: remaining.and_then(|v| v.trim().parse().ok()),
            reset,
        })
    }
}

/// Sends fully resolved requests and returns raw responses
///
/// Implementations must not interpret the status code: a 4xx or 5xx answer is
/// still `Ok`. Only transport failures are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs one HTTP exchange
    async fn send(&self, request: HttpRequest) -> Result<Response, AppError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport with the crate user agent and the given per-request timeout
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<Response, AppError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(pairs) => builder.form(pairs),
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        debug!("Response status: {}", status);

        Ok(Response::new(status, headers, body.to_vec()))
    }
}
