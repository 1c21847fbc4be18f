/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::{Method, Url};
use serde_json::Value;

/// What travels with a request besides its path
///
/// The variant decides the HTTP method: `Empty` and `Query` are GETs, `Json` is a POST.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Plain GET
    Empty,
    /// GET with query parameters
    Query(Vec<(String, String)>),
    /// POST with a JSON body and optional URL flags
    Json {
        /// Request body
        body: Value,
        /// Query parameters sent alongside the body
        query: Vec<(String, String)>,
    },
}

/// Endpoint path plus payload, replayable as-is on retry
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Path relative to the API base, without a leading slash
    pub endpoint: String,
    /// Body or query parameters
    pub payload: Payload,
}

impl RequestDescriptor {
    /// Plain GET descriptor
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: Payload::Empty,
        }
    }

    /// GET descriptor with query parameters
    pub fn query(endpoint: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: Payload::Query(query),
        }
    }

    /// POST descriptor with a JSON body
    pub fn json(endpoint: impl Into<String>, body: Value) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: Payload::Json {
                body,
                query: Vec::new(),
            },
        }
    }

    /// HTTP method implied by the payload
    #[must_use]
    pub fn method(&self) -> Method {
        match self.payload {
            Payload::Empty | Payload::Query(_) => Method::GET,
            Payload::Json { .. } => Method::POST,
        }
    }

    /// Query parameters, whatever the payload kind
    #[must_use]
    pub fn query_params(&self) -> &[(String, String)] {
        match &self.payload {
            Payload::Empty => &[],
            Payload::Query(query) => query,
            Payload::Json { query, .. } => query,
        }
    }

    /// JSON body, if any
    #[must_use]
    pub fn json_body(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Json { body, .. } => Some(body),
            _ => None,
        }
    }

    /// `GET versions`
    pub fn list_versions() -> Self {
        Self::get("versions")
    }

    /// `GET versions/{version}/skills`
    pub fn list_all_skills(version: &str) -> Result<Self, AppError> {
        Ok(Self::get(versioned_path(version, &["skills"])?))
    }

    /// `GET versions/{version}/skills?q=..&typeId=..`
    ///
    /// At least one of `search_string` and `type_id` must be given.
    pub fn search_skills(
        version: &str,
        search_string: Option<&str>,
        type_id: Option<&str>,
    ) -> Result<Self, AppError> {
        let query = SkillSearchQuery::new(search_string, type_id)?;
        Ok(Self::query(
            versioned_path(version, &["skills"])?,
            query.to_params(),
        ))
    }

    /// `GET versions/{version}/skills/{id}`
    pub fn get_skill_by_id(version: &str, skill_id: &str) -> Result<Self, AppError> {
        Ok(Self::get(versioned_path(version, &["skills", skill_id])?))
    }

    /// `GET versions/{version}/types`
    pub fn list_skill_types(version: &str) -> Result<Self, AppError> {
        Ok(Self::get(versioned_path(version, &["types"])?))
    }

    /// `POST versions/{version}/extract`, with `trace=true` when `with_source` is set
    pub fn extract_skills(
        version: &str,
        full_text: &str,
        with_source: bool,
    ) -> Result<Self, AppError> {
        let body = serde_json::json!({ "full_text": full_text });
        let query = if with_source {
            vec![("trace".to_string(), "true".to_string())]
        } else {
            Vec::new()
        };
        Ok(Self {
            endpoint: versioned_path(version, &["extract"])?,
            payload: Payload::Json { body, query },
        })
    }
}

/// Builds `versions/{version}/{tail..}` with every segment percent-encoded
///
/// # Arguments
/// * `version` - Classification version, e.g. `latest`
/// * `tail` - Remaining path segments; caller supplied ids go here verbatim
///
/// # Returns
/// The relative path, or [`AppError::InvalidInput`] when a caller supplied
/// segment is empty, `.` or `..`
pub fn versioned_path(version: &str, tail: &[&str]) -> Result<String, AppError> {
    for segment in std::iter::once(&version).chain(tail) {
        if segment.is_empty() || *segment == "." || *segment == ".." {
            return Err(AppError::InvalidInput(format!(
                "invalid path segment: {segment:?}"
            )));
        }
    }

    let mut url = Url::parse("relative:/")
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| AppError::InvalidInput("cannot build endpoint path".to_string()))?
        .clear()
        .push("versions")
        .push(version)
        .extend(tail);

    Ok(url.path().trim_start_matches('/').to_string())
}

/// Filters accepted by the skills search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSearchQuery {
    /// Free text matched against skill names
    pub q: Option<String>,
    /// Skill type identifier, see the types endpoint
    pub type_id: Option<String>,
}

impl SkillSearchQuery {
    /// Builds a query, rejecting the case where neither filter is present
    pub fn new(search_string: Option<&str>, type_id: Option<&str>) -> Result<Self, AppError> {
        if search_string.is_none() && type_id.is_none() {
            return Err(AppError::InvalidInput(
                "skill search requires a search string or a type id".to_string(),
            ));
        }
        Ok(Self {
            q: search_string.map(str::to_owned),
            type_id: type_id.map(str::to_owned),
        })
    }

    /// Query parameters in wire form
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(q) = &self.q {
            params.push(("q".to_string(), q.clone()));
        }
        if let Some(type_id) = &self.type_id {
            params.push(("typeId".to_string(), type_id.clone()));
        }
        params
    }
}
