#[derive(Debug, thiserror::Error)]
pub enum MealPlanError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("meal planning is unavailable: {0}")]
    PlanningUnavailable(anyhow::Error),

    #[error("failed to persist meal plans: {0}")]
    Persist(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MealPlanError>;
