/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Skills Classification API client
//!
//! A small asynchronous client for the Skills Classification REST API.
//!
//! The client authenticates with the client-credentials grant, keeps the
//! bearer token for the lifetime of the process and transparently refreshes
//! it once when a request fails because the token has expired.
//!
//! ## Usage
//!
//! ```ignore
//! use skills_client::prelude::*;
//!
//! let config = Config::new();
//! let client = SkillsClient::new(config).await?;
//!
//! let response = client.search_skills(Some("python"), None, None).await?;
//! let skills: SkillsResponse = response.parse_json()?;
//! ```
//!
//! Endpoint wrappers return the raw [`model::http::Response`]; typed views over
//! the payloads live in [`model::responses`] and [`presentation`].

/// Session, configuration, endpoint interfaces and export
pub mod application;

/// Library-wide constants
pub mod constants;

/// Error type shared across the crate
pub mod error;

/// Transport, request and response models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Domain records returned by the API
pub mod presentation;

/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
