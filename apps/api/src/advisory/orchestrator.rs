//! Advisory orchestrator: runs the three advisors strictly in sequence.
//!
//! Flow: Policy (no context) → Career (context = Policy text) →
//!       Culture (context = Career text) → record run → return all three.
//!
//! All-or-nothing: a failure at any stage aborts the run, returns no partial
//! advice and leaves the history untouched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::advisory::agents::{Role, RoleAgent};
use crate::advisory::category::RequestCategory;
use crate::advisory::history::{RunHistory, RunRecord, RunStep};
use crate::advisory::input::InputRecord;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// The composite result of one run, one text per advisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advice {
    pub policy: String,
    pub career: String,
    pub culture: String,
}

pub struct AdvisoryTeam {
    policy: RoleAgent,
    career: RoleAgent,
    culture: RoleAgent,
    history: RunHistory,
}

impl AdvisoryTeam {
    /// All three advisors share one generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            policy: RoleAgent::new(Role::Policy, generator.clone()),
            career: RoleAgent::new(Role::Career, generator.clone()),
            culture: RoleAgent::new(Role::Culture, generator),
            history: RunHistory::default(),
        }
    }

    pub async fn get_advice(
        &self,
        category: &RequestCategory,
        input: &InputRecord,
    ) -> Result<Advice, AppError> {
        if category.is_general() {
            warn!("Unrecognised category '{category}', using generic templates");
        }
        info!("Advisory run started: category={category}");

        let mut steps = Vec::with_capacity(Role::ORDER.len());

        let policy = self.policy.run(None, category, input).await?;
        steps.push(RunStep::completed(self.policy.role()));

        let career = self.career.run(Some(policy.as_str()), category, input).await?;
        steps.push(RunStep::completed(self.career.role()));

        let culture = self.culture.run(Some(career.as_str()), category, input).await?;
        steps.push(RunStep::completed(self.culture.role()));

        let record = RunRecord::new(category.clone(), steps);
        info!("Advisory run {} completed: category={category}", record.id);
        self.history.append(record).await;

        Ok(Advice {
            policy,
            career,
            culture,
        })
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::input::{Field, PLACEHOLDER};
    use crate::advisory::testing::ScriptedGenerator;

    const SALARY_QUESTION: &str = "What is a fair salary for 5 years experience in IT in Seoul?";

    fn team(generator: &Arc<ScriptedGenerator>) -> AdvisoryTeam {
        AdvisoryTeam::new(generator.clone())
    }

    fn salary_input() -> InputRecord {
        InputRecord::new(SALARY_QUESTION)
            .with(Field::Position, "Manager")
            .with(Field::Experience, "4-7년")
            .with(Field::Industry, "IT")
            .with(Field::Location, "서울")
    }

    #[tokio::test]
    async fn test_three_calls_in_policy_career_culture_order() {
        let generator = Arc::new(ScriptedGenerator::new());
        let team = team(&generator);

        let advice = team
            .get_advice(&RequestCategory::Compensation, &salary_input())
            .await
            .unwrap();

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("김민준 인사 전문가"));
        assert!(prompts[1].contains("이서연 경력 파트너"));
        assert!(prompts[2].contains("박지훈 직장 어드바이저"));

        assert_eq!(advice.policy, ScriptedGenerator::reply(1));
        assert_eq!(advice.career, ScriptedGenerator::reply(2));
        assert_eq!(advice.culture, ScriptedGenerator::reply(3));
    }

    #[tokio::test]
    async fn test_each_stage_sees_previous_output_verbatim() {
        let generator = Arc::new(ScriptedGenerator::new());
        let advice = team(&generator)
            .get_advice(&RequestCategory::Compensation, &salary_input())
            .await
            .unwrap();

        let prompts = generator.prompts();
        assert!(prompts[1].contains(&advice.policy));
        assert!(prompts[2].contains(&advice.career));
        // Culture only sees Policy through Career's text.
        assert!(!prompts[2].contains(&advice.policy));
    }

    #[tokio::test]
    async fn test_compensation_scenario_end_to_end() {
        let generator = Arc::new(ScriptedGenerator::new());
        let advice = team(&generator)
            .get_advice(&RequestCategory::Compensation, &salary_input())
            .await
            .unwrap();

        let prompts = generator.prompts();
        assert!(prompts[0].contains(SALARY_QUESTION));
        assert!(prompts[0].contains("근무 산업: IT"));
        assert!(prompts[0].contains("지역: 서울"));
        assert!(!prompts[0].contains(PLACEHOLDER));

        assert!(!advice.policy.is_empty());
        assert!(!advice.career.is_empty());
        assert!(!advice.culture.is_empty());
    }

    #[tokio::test]
    async fn test_failure_on_second_call_aborts_run() {
        let generator = Arc::new(ScriptedGenerator::failing_on(2));
        let team = team(&generator);

        let err = team
            .get_advice(&RequestCategory::Employment, &salary_input())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Generation { stage: Role::Career, .. }));
        // Culture never ran.
        assert_eq!(generator.prompts().len(), 2);
        assert_eq!(team.history().len().await, 0);
    }

    #[tokio::test]
    async fn test_successful_runs_appended_to_history() {
        let generator = Arc::new(ScriptedGenerator::new());
        let team = team(&generator);

        team.get_advice(&RequestCategory::Performance, &salary_input())
            .await
            .unwrap();
        team.get_advice(&RequestCategory::parse("퇴직/이직"), &salary_input())
            .await
            .unwrap();

        let records = team.history().snapshot().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, RequestCategory::Performance);
        assert!(records[1].category.is_general());
        let roles: Vec<_> = records[0].steps.iter().map(|s| s.role).collect();
        assert_eq!(roles, Role::ORDER.to_vec());
    }

    #[tokio::test]
    async fn test_category_is_shared_by_all_stages() {
        let generator = Arc::new(ScriptedGenerator::new());
        team(&generator)
            .get_advice(&RequestCategory::WorkplaceIssue, &salary_input())
            .await
            .unwrap();

        let prompts = generator.prompts();
        assert!(prompts[0].contains("직장 내 문제 관련 질문"));
        assert!(prompts[1].contains("직장 내 문제 상황에서의 경력 개발"));
        assert!(prompts[2].contains("직장 내 문제 상황에서의 종합적인"));
    }
}
