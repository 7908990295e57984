//! Prompt template selection: picks the category body for a role and fills it.
//!
//! The field table below is the single source of truth for which input fields each
//! template renders. Every listed field is optional; a missing one renders as
//! `PLACEHOLDER`. `General` categories render through the generic bodies, which
//! carry the question and the category label but no field block.

use crate::advisory::agents::Role;
use crate::advisory::category::RequestCategory;
use crate::advisory::input::{Field, InputRecord};
use crate::advisory::prompts::*;

/// A category body plus the labelled fields appended after it.
#[derive(Debug, Clone, Copy)]
pub struct StageTemplate {
    pub body: &'static str,
    pub fields: &'static [(Field, &'static str)],
}

const NO_FIELDS: &[(Field, &str)] = &[];

/// Returns the template a role uses for a category.
pub fn template_for(role: Role, category: &RequestCategory) -> StageTemplate {
    use RequestCategory::*;

    match (role, category) {
        (Role::Policy, Employment) => stage(
            POLICY_EMPLOYMENT,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::Industry, "근무 산업"),
                (Field::Experience, "경력 기간"),
            ],
        ),
        (Role::Policy, Compensation) => stage(
            POLICY_COMPENSATION,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::Industry, "근무 산업"),
                (Field::Experience, "경력 기간"),
                (Field::Location, "지역"),
            ],
        ),
        (Role::Policy, Performance) => stage(
            POLICY_PERFORMANCE,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::Industry, "근무 산업"),
                (Field::CompanySize, "회사 규모"),
            ],
        ),
        (Role::Policy, WorkplaceIssue) => stage(
            POLICY_WORKPLACE_ISSUE,
            &[
                (Field::IssueType, "문제 유형"),
                (Field::Position, "직급/직책"),
                (Field::CompanySize, "회사 규모"),
            ],
        ),
        (Role::Policy, CareerDevelopment) => stage(
            POLICY_CAREER_DEVELOPMENT,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::CareerGoal, "목표 경력 경로"),
                (Field::Experience, "경력 기간"),
            ],
        ),
        (Role::Policy, General(_)) => stage(POLICY_GENERAL, NO_FIELDS),

        (Role::Career, Employment) => stage(
            CAREER_EMPLOYMENT,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::CareerGoal, "경력 목표"),
                (Field::Experience, "경력 기간"),
            ],
        ),
        (Role::Career, Compensation) => stage(
            CAREER_COMPENSATION,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::Salary, "급여 정보"),
                (Field::Experience, "경력 기간"),
            ],
        ),
        (Role::Career, Performance) => stage(
            CAREER_PERFORMANCE,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::PerformanceConcern, "평가 고민"),
                (Field::CareerGoal, "경력 목표"),
            ],
        ),
        (Role::Career, WorkplaceIssue) => stage(
            CAREER_WORKPLACE_ISSUE,
            &[
                (Field::IssueType, "문제 유형"),
                (Field::Position, "현재 직급/직무"),
                (Field::Experience, "경력 기간"),
            ],
        ),
        (Role::Career, CareerDevelopment) => stage(
            CAREER_CAREER_DEVELOPMENT,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::CareerGoal, "경력 목표"),
                (Field::SkillInterests, "관심 역량 영역"),
                (Field::Experience, "경력 기간"),
            ],
        ),
        (Role::Career, General(_)) => stage(CAREER_GENERAL, NO_FIELDS),

        (Role::Culture, Employment) => stage(
            CULTURE_EMPLOYMENT,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::WorkplaceCulture, "직장 문화 유형"),
                (Field::Personality, "개인 성향"),
            ],
        ),
        (Role::Culture, Compensation) => stage(
            CULTURE_COMPENSATION,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::CompanySize, "조직 규모"),
                (Field::WorkplaceCulture, "문화적 특성"),
            ],
        ),
        (Role::Culture, Performance) => stage(
            CULTURE_PERFORMANCE,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::TeamStructure, "팀 구조"),
                (Field::EvaluationCulture, "평가 문화"),
            ],
        ),
        (Role::Culture, WorkplaceIssue) => stage(
            CULTURE_WORKPLACE_ISSUE,
            &[
                (Field::IssueType, "문제 유형"),
                (Field::Relationship, "관계 구조"),
                (Field::WorkplaceCulture, "조직 문화"),
                (Field::Personality, "개인 성향"),
            ],
        ),
        (Role::Culture, CareerDevelopment) => stage(
            CULTURE_CAREER_DEVELOPMENT,
            &[
                (Field::Position, "현재 직급/직무"),
                (Field::CareerGoal, "경력 목표"),
                (Field::WorkplaceCulture, "조직 문화"),
                (Field::RelationshipStyle, "대인관계 스타일"),
            ],
        ),
        (Role::Culture, General(_)) => stage(CULTURE_GENERAL, NO_FIELDS),
    }
}

const fn stage(body: &'static str, fields: &'static [(Field, &'static str)]) -> StageTemplate {
    StageTemplate { body, fields }
}

/// Fills the role's category template with the input record. Never fails.
pub fn select(role: Role, category: &RequestCategory, input: &InputRecord) -> String {
    let template = template_for(role, category);
    let body = fill(
        template.body,
        &[("question", input.question()), ("category", category.label())],
    );

    if template.fields.is_empty() {
        return body;
    }

    let field_block = template
        .fields
        .iter()
        .map(|(field, label)| format!("{label}: {}", input.value_or_placeholder(*field)))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{body}\n\n{field_block}")
}

/// Single-pass `{token}` substitution. Substituted values are never rescanned, so user
/// text or model output containing braces passes through untouched. Unknown tokens are
/// left as written.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
