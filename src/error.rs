use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bepviet_mealplan::MealPlanError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("Meal planning is unavailable")]
    PlanningUnavailable(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<MealPlanError> for AppError {
    fn from(err: MealPlanError) -> Self {
        match err {
            MealPlanError::Validate(errors) => AppError::ValidationError(errors),
            MealPlanError::PlanningUnavailable(e) => AppError::PlanningUnavailable(format!("{e:#}")),
            MealPlanError::Persist(e) => AppError::InternalError(format!("{e:#}")),
        }
    }
}

impl From<bepviet_shared::Error> for AppError {
    fn from(err: bepviet_shared::Error) -> Self {
        match err {
            bepviet_shared::Error::User(msg) => AppError::BadRequest(msg),
            bepviet_shared::Error::Unknown(e) => AppError::InternalError(format!("{e:#}")),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(format!("{err:#}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "validation_error",
                    "message": "The request is invalid",
                    "details": errors,
                }),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "bad_request", "message": msg }),
            ),
            AppError::PlanningUnavailable(e) => {
                tracing::error!("Meal planning unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "planning_unavailable",
                        "message": "Meal planning is temporarily unavailable. Please try again later.",
                    }),
                )
            }
            AppError::InternalError(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "An unexpected error occurred. Please try again later.",
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
