/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::skill::{ExtractedSkill, Skill, SkillType};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Classification versions known to the API
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionsResponse {
    /// Version names, newest first as returned by the server
    #[serde(alias = "data", default)]
    pub versions: Vec<String>,
}

/// Listing or search result
#[derive(DebugPretty, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SkillsResponse {
    /// Matching skills
    #[serde(alias = "data", default)]
    pub skills: Vec<Skill>,
    /// Remaining attributes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillsResponse {
    /// Number of skills in the response
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// True when no skill matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterator over the skills
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }
}

impl std::fmt::Display for SkillsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("ID"),
            Cell::new("NAME"),
            Cell::new("TYPE"),
        ]));

        for skill in &self.skills {
            let skill_type = skill
                .skill_type
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "-".to_string());

            table.add_row(Row::new(vec![
                Cell::new(&skill.id),
                Cell::new(&skill.name),
                Cell::new(&skill_type),
            ]));
        }

        write!(f, "{}", table)
    }
}

/// Single skill lookup
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SkillResponse {
    /// The requested skill
    #[serde(alias = "data", default)]
    pub skill: Skill,
}

/// Skill types available for filtering
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SkillTypesResponse {
    /// `{id, name}` pairs
    #[serde(alias = "data", default)]
    pub types: Vec<SkillType>,
}

/// Result of tagging a document with skills
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExtractResponse {
    /// Skills found in the document
    #[serde(alias = "data", default)]
    pub skills: Vec<ExtractedSkill>,
    /// Document-level trace, present when tracing was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Value>,
}
