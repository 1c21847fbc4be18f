/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::DEFAULT_TOKEN_LIFETIME_SECS;
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Body returned by the token endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Token type, usually "Bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Granted scope
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Converts the response into an [`AccessToken`] issued now
    pub fn into_token(self) -> Result<AccessToken, AppError> {
        let access_token = self
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::TokenResponse("missing access_token".to_string()))?;

        Ok(AccessToken {
            access_token,
            token_type: self.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_in: self.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS),
            scope: self.scope,
            issued_at: Utc::now(),
        })
    }
}

/// Bearer token held by a session
///
/// `issued_at` and `expires_in` are informational; the session decides on
/// refresh by probing the API, not by the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Opaque bearer string
    pub access_token: String,
    /// Token type reported by the auth server
    pub token_type: String,
    /// Nominal lifetime in seconds
    pub expires_in: u64,
    /// Granted scope, if reported
    pub scope: Option<String>,
    /// Local time the token was received
    pub issued_at: DateTime<Utc>,
}

impl AccessToken {
    /// Time elapsed since the token was issued
    #[must_use]
    pub fn age(&self) -> Duration {
        Utc::now() - self.issued_at
    }

    /// Whether the nominal lifetime has passed
    ///
    /// A lifetime too large for [`Duration`] never expires.
    #[must_use]
    pub fn is_nominally_expired(&self) -> bool {
        i64::try_from(self.expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .is_some_and(|lifetime| self.age() >= lifetime)
    }
}
