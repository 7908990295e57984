//! Axum route handlers for the Advisory API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::advisory::agents::{Persona, Role};
use crate::advisory::category::RequestCategory;
use crate::advisory::history::RunRecord;
use crate::advisory::input::InputRecord;
use crate::advisory::orchestrator::Advice;
use crate::advisory::selector::template_for;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub category: RequestCategory,
    #[serde(default)]
    pub input: InputRecord,
}

#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StageFields {
    pub role: Role,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub slug: &'static str,
    pub label: String,
    pub stages: Vec<StageFields>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/advice
///
/// Runs Policy → Career → Culture and returns all three texts.
/// Rejects an unreadable body or a blank question before any model call is made.
pub async fn handle_get_advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<Advice>, AppError> {
    let Json(request) = payload?;
    if !request.input.has_question() {
        return Err(AppError::Validation(
            "input.question cannot be empty".to_string(),
        ));
    }

    let advice = state
        .team
        .get_advice(&request.category, &request.input)
        .await?;

    Ok(Json(advice))
}

/// GET /api/v1/advice/history
pub async fn handle_history(State(state): State<AppState>) -> Json<Vec<RunRecord>> {
    Json(state.team.history().snapshot().await)
}

/// GET /api/v1/advisors
pub async fn handle_advisors() -> Json<Vec<&'static Persona>> {
    Json(Role::ORDER.iter().map(|r| r.persona()).collect())
}

/// GET /api/v1/categories
///
/// Lists the dedicated categories and the input fields each stage renders,
/// so a form can be built without hardcoding the template table.
pub async fn handle_categories() -> Json<Vec<CategoryInfo>> {
    Json(RequestCategory::known().iter().map(category_info).collect())
}

fn category_info(category: &RequestCategory) -> CategoryInfo {
    let stages = Role::ORDER
        .iter()
        .map(|&role| StageFields {
            role,
            fields: template_for(role, category)
                .fields
                .iter()
                .map(|&(field, label)| FieldInfo {
                    key: field.key(),
                    label,
                })
                .collect(),
        })
        .collect();

    CategoryInfo {
        slug: category.slug(),
        label: category.label().to_string(),
        stages,
    }
}
