//! Role agents: the three advisory personas, one generation call each.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::advisory::category::RequestCategory;
use crate::advisory::input::InputRecord;
use crate::advisory::prompts::{
    CAREER_FRAME, CAREER_INTRO, CULTURE_FRAME, CULTURE_INTRO, POLICY_FRAME, POLICY_INTRO,
};
use crate::advisory::selector::{fill, select};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Pipeline stage. Declaration order is execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Policy,
    Career,
    Culture,
}

impl Role {
    pub const ORDER: [Role; 3] = [Role::Policy, Role::Career, Role::Culture];

    pub fn persona(self) -> &'static Persona {
        match self {
            Role::Policy => &POLICY_PERSONA,
            Role::Career => &CAREER_PERSONA,
            Role::Culture => &CULTURE_PERSONA,
        }
    }

    /// Step name recorded in the run history.
    pub fn action(self) -> &'static str {
        match self {
            Role::Policy => "policy_analysis",
            Role::Career => "career_enhancement",
            Role::Culture => "culture_finalization",
        }
    }

    /// Career and Culture build on the previous stage's text; Policy starts cold.
    pub fn needs_prior_context(self) -> bool {
        !matches!(self, Role::Policy)
    }

    fn frame(self) -> &'static str {
        match self {
            Role::Policy => POLICY_FRAME,
            Role::Career => CAREER_FRAME,
            Role::Culture => CULTURE_FRAME,
        }
    }
}

/// Who an advisor claims to be. The intro is sent to the model, not to API clients.
#[derive(Debug, Serialize)]
pub struct Persona {
    pub role: Role,
    pub name: &'static str,
    pub specialty: &'static str,
    pub years_experience: u8,
    #[serde(skip)]
    pub intro: &'static str,
}

static POLICY_PERSONA: Persona = Persona {
    role: Role::Policy,
    name: "김민준 인사 전문가",
    specialty: "인사 정책, 노동법, 급여/복리후생, 평가 시스템, 인사 제도",
    years_experience: 15,
    intro: POLICY_INTRO,
};

static CAREER_PERSONA: Persona = Persona {
    role: Role::Career,
    name: "이서연 경력 파트너",
    specialty: "경력 개발, 역량 향상, 승진/이직 전략",
    years_experience: 12,
    intro: CAREER_INTRO,
};

static CULTURE_PERSONA: Persona = Persona {
    role: Role::Culture,
    name: "박지훈 직장 어드바이저",
    specialty: "직장 문화, 대인관계, 소통 전략, 갈등 관리",
    years_experience: 13,
    intro: CULTURE_INTRO,
};

/// One pipeline stage: a persona wrapped around the shared text generator.
pub struct RoleAgent {
    role: Role,
    generator: Arc<dyn TextGenerator>,
}

impl RoleAgent {
    pub fn new(role: Role, generator: Arc<dyn TextGenerator>) -> Self {
        Self { role, generator }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Assembles the full prompt: persona, prior stage's text (verbatim), category body.
    pub fn build_prompt(
        &self,
        prior_context: Option<&str>,
        category: &RequestCategory,
        input: &InputRecord,
    ) -> Result<String, AppError> {
        let prior = match (self.role.needs_prior_context(), prior_context) {
            (true, Some(text)) => text,
            (true, None) => return Err(AppError::MissingPriorContext(self.role)),
            (false, Some(_)) => {
                debug!("{:?} advisor ignores prior context", self.role);
                ""
            }
            (false, None) => "",
        };

        let persona = self.role.persona();
        let body = select(self.role, category, input);

        Ok(fill(
            self.role.frame(),
            &[
                ("name", persona.name),
                ("intro", persona.intro),
                ("prior", prior),
                ("body", &body),
            ],
        ))
    }

    /// Issues exactly one generation call and returns the model's text unmodified.
    pub async fn run(
        &self,
        prior_context: Option<&str>,
        category: &RequestCategory,
        input: &InputRecord,
    ) -> Result<String, AppError> {
        let prompt = self.build_prompt(prior_context, category, input)?;

        info!(
            "{:?} advisor generating ({} chars of prompt, category={})",
            self.role,
            prompt.chars().count(),
            category
        );

        let text = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|source| AppError::Generation {
                stage: self.role,
                source,
            })?;

        info!(
            "{:?} advisor finished ({} chars)",
            self.role,
            text.chars().count()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::input::Field;
    use crate::advisory::testing::ScriptedGenerator;

    fn agent(role: Role, generator: &Arc<ScriptedGenerator>) -> RoleAgent {
        RoleAgent::new(role, generator.clone())
    }

    fn input() -> InputRecord {
        InputRecord::new("이직 시 연봉을 얼마나 올려야 할까요?").with(Field::Position, "과장/개발자")
    }

    #[test]
    fn test_later_stages_require_prior_context() {
        let generator = Arc::new(ScriptedGenerator::new());
        for role in [Role::Career, Role::Culture] {
            let err = agent(role, &generator)
                .build_prompt(None, &RequestCategory::Compensation, &input())
                .unwrap_err();
            assert!(matches!(err, AppError::MissingPriorContext(r) if r == role));
        }
    }

    #[test]
    fn test_policy_prompt_carries_persona_and_ignores_prior() {
        let generator = Arc::new(ScriptedGenerator::new());
        let prompt = agent(Role::Policy, &generator)
            .build_prompt(Some("무시될 텍스트"), &RequestCategory::Compensation, &input())
            .unwrap();
        assert!(prompt.contains("김민준 인사 전문가"));
        assert!(prompt.contains("15년간"));
        assert!(prompt.contains("이직 시 연봉을 얼마나 올려야 할까요?"));
        assert!(!prompt.contains("무시될 텍스트"));
    }

    #[test]
    fn test_career_prompt_embeds_prior_verbatim_in_block() {
        let generator = Arc::new(ScriptedGenerator::new());
        let prior = "1. 최저임금법 기준\n2. {body} 같은 중괄호도 그대로";
        let prompt = agent(Role::Career, &generator)
            .build_prompt(Some(prior), &RequestCategory::Compensation, &input())
            .unwrap();
        let block = format!("=== 인사 전문가의 분석 ===\n{prior}\n=== 분석 끝 ===");
        assert!(prompt.contains(&block));
        assert!(prompt.contains("이서연 경력 파트너"));
        assert!(prompt.contains("급여 정보: 정보 없음"));
    }

    #[test]
    fn test_culture_prompt_asks_for_three_perspectives() {
        let generator = Arc::new(ScriptedGenerator::new());
        let prompt = agent(Role::Culture, &generator)
            .build_prompt(Some("경력 조언"), &RequestCategory::WorkplaceIssue, &input())
            .unwrap();
        assert!(prompt.contains("=== 이전 전문가들의 분석 ===\n경력 조언\n=== 분석 끝 ==="));
        assert!(prompt.contains("3. 직장 어드바이저 (문화/관계 관점)"));
    }

    #[tokio::test]
    async fn test_run_returns_generator_text_unmodified() {
        let generator = Arc::new(ScriptedGenerator::new());
        let text = agent(Role::Policy, &generator)
            .run(None, &RequestCategory::Employment, &input())
            .await
            .unwrap();
        assert_eq!(text, ScriptedGenerator::reply(1));
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_run_missing_context_makes_no_call() {
        let generator = Arc::new(ScriptedGenerator::new());
        let result = agent(Role::Culture, &generator)
            .run(None, &RequestCategory::Employment, &input())
            .await;
        assert!(result.is_err());
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_tagged_with_stage() {
        let generator = Arc::new(ScriptedGenerator::failing_on(1));
        let err = agent(Role::Career, &generator)
            .run(Some("정책 분석"), &RequestCategory::Employment, &input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation { stage: Role::Career, .. }));
    }

    #[test]
    fn test_personas_follow_pipeline_order() {
        let names: Vec<_> = Role::ORDER.iter().map(|r| r.persona().name).collect();
        assert_eq!(
            names,
            vec!["김민준 인사 전문가", "이서연 경력 파트너", "박지훈 직장 어드바이저"]
        );
    }
}
