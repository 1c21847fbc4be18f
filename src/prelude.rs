/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Skills Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```ignore
//! use skills_client::prelude::*;
//!
//! let client = SkillsClient::new(Config::new()).await?;
//! let versions: VersionsResponse = client.list_versions().await?.parse_json()?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::config::{AuthConfig, Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION AND ENDPOINTS
// ============================================================================

/// Token manager
pub use crate::application::auth::Auth;

/// Authenticated session
pub use crate::application::client::SkillsClient;

/// Endpoint wrappers
pub use crate::application::interfaces::skills::SkillsService;

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// Transport seam and raw response
pub use crate::model::http::{
    HttpRequest, HttpTransport, RateLimitInfo, ReqwestTransport, RequestBody, Response,
};

/// Access token
pub use crate::model::auth::AccessToken;

/// Request descriptors
pub use crate::model::requests::{Payload, RequestDescriptor, SkillSearchQuery};

/// Typed responses
pub use crate::model::responses::{
    ExtractResponse, SkillResponse, SkillTypesResponse, SkillsResponse, VersionsResponse,
};

/// Domain records
pub use crate::presentation::skill::{ExtractedSkill, Skill, SkillType};

// ============================================================================
// EXPORT AND UTILITIES
// ============================================================================

/// CSV export
pub use crate::application::export::{export_records_csv, write_records_csv};

/// Logging setup
pub use crate::utils::logger::setup_logger;
