use axum::{
    Json,
    extract::{Path, State},
};
use bepviet_mealplan::{
    Constraints, MealPlanError, RandomPicker, RecommendInput, sqlite::SqliteMealPlanStore,
};
use bepviet_shared::mealplan::MealPlan;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_id: String,
    pub days: Option<u16>,
    #[serde(default)]
    pub constraints: Constraints,
    /// `YYYY-MM-DD`, today (UTC) when missing.
    pub start_date: Option<String>,
    /// Fixes the random draws so the same request gives the same plans.
    pub seed: Option<u64>,
}

/// POST /api/meal-plans/recommend
#[tracing::instrument(skip_all, fields(user_id = %request.user_id))]
pub async fn recommend(
    State(app): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Vec<MealPlan>>, AppError> {
    let start = match &request.start_date {
        Some(value) => bepviet_shared::parse_date(value)?,
        None => bepviet_shared::today(),
    };

    let catalog = app.catalog();
    let tags = app
        .tag_cache
        .lock()
        .await
        .get_or_refresh(&catalog, OffsetDateTime::now_utc())
        .await
        .map_err(MealPlanError::PlanningUnavailable)?;

    let input = RecommendInput {
        user_id: request.user_id,
        days: request.days.unwrap_or(app.config.planner.default_days),
        constraints: request.constraints,
    };

    let mut picker = match request.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };

    let plans = app
        .planner()
        .with_tags(tags)
        .recommend(input, start, &mut picker)
        .await?;

    Ok(Json(plans))
}

/// GET /api/users/{user_id}/meal-plans
pub async fn list(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MealPlan>>, AppError> {
    let plans = SqliteMealPlanStore(app.db.read_db.clone())
        .find_by_user(&user_id)
        .await?;

    Ok(Json(plans))
}
