//! The structured input record collected from the consultation form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rendered in place of any field the user left out.
pub const PLACEHOLDER: &str = "정보 없음";

/// Every named field a template may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Question,
    Position,
    Experience,
    Industry,
    CompanySize,
    Location,
    Salary,
    IssueType,
    PerformanceConcern,
    CareerGoal,
    SkillInterests,
    WorkplaceCulture,
    Personality,
    Relationship,
    RelationshipStyle,
    TeamStructure,
    EvaluationCulture,
}

impl Field {
    pub const ALL: [Field; 17] = [
        Field::Question,
        Field::Position,
        Field::Experience,
        Field::Industry,
        Field::CompanySize,
        Field::Location,
        Field::Salary,
        Field::IssueType,
        Field::PerformanceConcern,
        Field::CareerGoal,
        Field::SkillInterests,
        Field::WorkplaceCulture,
        Field::Personality,
        Field::Relationship,
        Field::RelationshipStyle,
        Field::TeamStructure,
        Field::EvaluationCulture,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Question => "question",
            Field::Position => "position",
            Field::Experience => "experience",
            Field::Industry => "industry",
            Field::CompanySize => "company_size",
            Field::Location => "location",
            Field::Salary => "salary",
            Field::IssueType => "issue_type",
            Field::PerformanceConcern => "performance_concern",
            Field::CareerGoal => "career_goal",
            Field::SkillInterests => "skill_interests",
            Field::WorkplaceCulture => "workplace_culture",
            Field::Personality => "personality",
            Field::Relationship => "relationship",
            Field::RelationshipStyle => "relationship_style",
            Field::TeamStructure => "team_structure",
            Field::EvaluationCulture => "evaluation_culture",
        }
    }
}

/// Field name → free text. Any field may be missing; nothing is validated or trimmed
/// beyond treating a blank value as missing.
///
/// Deserialization is lenient: `null` counts as absent and unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<String>>")]
pub struct InputRecord(BTreeMap<Field, String>);

impl From<BTreeMap<String, Option<String>>> for InputRecord {
    fn from(raw: BTreeMap<String, Option<String>>) -> Self {
        let mut fields = BTreeMap::new();
        for (key, value) in raw {
            match Field::from_key(&key) {
                Some(field) => {
                    if let Some(value) = value {
                        fields.insert(field, value);
                    }
                }
                None => debug!("Ignoring unknown input field '{key}'"),
            }
        }
        Self(fields)
    }
}

impl InputRecord {
    #[cfg(test)]
    pub fn new(question: impl Into<String>) -> Self {
        Self::default().with(Field::Question, question)
    }

    #[cfg(test)]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.0.insert(field, value.into());
        self
    }

    /// The value as given, or `None` when absent or blank.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn value_or_placeholder(&self, field: Field) -> &str {
        self.get(field).unwrap_or(PLACEHOLDER)
    }

    pub fn question(&self) -> &str {
        self.value_or_placeholder(Field::Question)
    }

    pub fn has_question(&self) -> bool {
        self.get(Field::Question).is_some()
    }
}
