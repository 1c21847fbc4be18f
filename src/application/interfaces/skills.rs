use crate::error::AppError;
use crate::model::http::Response;
use async_trait::async_trait;

/// Endpoint wrappers of the skills API
///
/// Every method returns the raw [`Response`]; callers inspect the status and
/// parse the body with [`Response::parse_json`]. A `version` of `None` means
/// the configured default version.
#[async_trait]
pub trait SkillsService: Send + Sync {
    /// Lists the classification versions
    async fn list_versions(&self) -> Result<Response, AppError>;

    /// Lists every skill of a version
    async fn list_all_skills(&self, version: Option<&str>) -> Result<Response, AppError>;

    /// Searches skills by name and/or type
    ///
    /// # Errors
    /// [`AppError::InvalidInput`] when both `search_string` and `type_id` are `None`;
    /// nothing is sent in that case.
    async fn search_skills(
        &self,
        search_string: Option<&str>,
        type_id: Option<&str>,
        version: Option<&str>,
    ) -> Result<Response, AppError>;

    /// Fetches one skill by identifier
    async fn get_skill_by_id(
        &self,
        skill_id: &str,
        version: Option<&str>,
    ) -> Result<Response, AppError>;

    /// Lists skill types (hard skill, soft skill, certification)
    async fn list_skill_types(&self, version: Option<&str>) -> Result<Response, AppError>;

    /// Tags a UTF-8 document with skills
    async fn extract_skills(&self, text: &str, version: Option<&str>)
    -> Result<Response, AppError>;

    /// Tags a document and includes byte offsets of every match
    async fn extract_skills_with_source(
        &self,
        text: &str,
        version: Option<&str>,
    ) -> Result<Response, AppError>;
}
