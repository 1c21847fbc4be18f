/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Error type for every fallible operation in the crate
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection, DNS, TLS, timeout)
    Network(reqwest::Error),
    /// Local I/O failure
    Io(std::io::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Non-success HTTP status surfaced by the caller
    Unexpected(StatusCode),
    /// Credentials were rejected or the issued token failed validation
    Unauthorized,
    /// Token endpoint answered without a usable access token
    TokenResponse(String),
    /// A call precondition was violated before any request was sent
    InvalidInput(String),
    /// Tabular export failure
    Export(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unexpected(s) => write!(f, "unexpected status code: {s}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::TokenResponse(msg) => write!(f, "invalid token response: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Export(msg) => write!(f, "export error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl AppError {
    /// True for failures that mean the session cannot authenticate
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Unauthorized | AppError::TokenResponse(_))
    }
}
