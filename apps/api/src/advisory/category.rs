//! Request categories: the closed set of advisory topics, plus an explicit fallback.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label used when a request arrives with a blank category.
const BLANK_CATEGORY_LABEL: &str = "기타";

/// The advisory topic for one request. Selects the template family for all three advisors.
///
/// Parsing never fails: anything outside the five known topics becomes `General`,
/// which renders through the generic templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestCategory {
    Employment,
    Compensation,
    Performance,
    WorkplaceIssue,
    CareerDevelopment,
    General(String),
}

impl RequestCategory {
    /// The five topics with dedicated templates, in form order.
    pub fn known() -> [RequestCategory; 5] {
        [
            RequestCategory::Employment,
            RequestCategory::Compensation,
            RequestCategory::Performance,
            RequestCategory::WorkplaceIssue,
            RequestCategory::CareerDevelopment,
        ]
    }

    /// Accepts the Korean form label or the English slug.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "고용/계약" | "employment" => RequestCategory::Employment,
            "급여/복리후생" | "compensation" => RequestCategory::Compensation,
            "평가/성과" | "performance" => RequestCategory::Performance,
            "직장 내 문제" | "workplace_issue" => RequestCategory::WorkplaceIssue,
            "경력 개발" | "career_development" => RequestCategory::CareerDevelopment,
            "" => RequestCategory::General(BLANK_CATEGORY_LABEL.to_string()),
            _ => RequestCategory::General(raw.to_string()),
        }
    }

    /// Korean label as shown to users and embedded in prompts.
    pub fn label(&self) -> &str {
        match self {
            RequestCategory::Employment => "고용/계약",
            RequestCategory::Compensation => "급여/복리후생",
            RequestCategory::Performance => "평가/성과",
            RequestCategory::WorkplaceIssue => "직장 내 문제",
            RequestCategory::CareerDevelopment => "경력 개발",
            RequestCategory::General(label) => label,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            RequestCategory::Employment => "employment",
            RequestCategory::Compensation => "compensation",
            RequestCategory::Performance => "performance",
            RequestCategory::WorkplaceIssue => "workplace_issue",
            RequestCategory::CareerDevelopment => "career_development",
            RequestCategory::General(_) => "general",
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, RequestCategory::General(_))
    }
}

impl From<String> for RequestCategory {
    fn from(raw: String) -> Self {
        RequestCategory::parse(&raw)
    }
}

impl From<RequestCategory> for String {
    fn from(category: RequestCategory) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
