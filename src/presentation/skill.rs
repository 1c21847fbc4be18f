use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category a skill belongs to (hard skill, soft skill, certification)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SkillType {
    /// Type identifier, used as `typeId` when searching
    #[serde(default)]
    pub id: String,
    /// Human readable name
    #[serde(default)]
    pub name: String,
}

/// A single skill record
///
/// Fields the client does not model are kept in `extra` untouched.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Skill {
    /// Skill identifier
    #[serde(default)]
    pub id: String,
    /// Skill name
    #[serde(default)]
    pub name: String,
    /// Skill category
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<SkillType>,
    /// Link to the skill description
    #[serde(rename = "infoUrl", default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    /// Remaining attributes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A skill found in a document by the extraction endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExtractedSkill {
    /// The matched skill
    #[serde(default)]
    pub skill: Skill,
    /// Match confidence in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Source offsets, present when tracing was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Value>,
    /// Remaining attributes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
