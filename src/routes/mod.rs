use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use bepviet_mealplan::{
    Planner, TagCache,
    sqlite::{SqliteCatalog, SqliteMealPlanStore},
};
use tokio::sync::Mutex;

mod health;
mod meal_plan;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: bepviet_shared::State,
    pub tag_cache: Arc<Mutex<TagCache>>,
}

impl AppState {
    pub fn new(config: crate::config::Config, db: bepviet_shared::State) -> Self {
        let tag_cache = Arc::new(Mutex::new(TagCache::new(config.tag_cache_ttl())));

        Self {
            config,
            db,
            tag_cache,
        }
    }

    pub fn catalog(&self) -> SqliteCatalog {
        SqliteCatalog(self.db.read_db.clone())
    }

    pub fn store(&self) -> SqliteMealPlanStore {
        SqliteMealPlanStore(self.db.write_db.clone())
    }

    pub fn planner(&self) -> Planner<SqliteCatalog, SqliteMealPlanStore> {
        Planner::new(self.catalog(), self.store())
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.db.read_db.clone())
        .route("/api/meal-plans/recommend", post(meal_plan::recommend))
        .route("/api/users/{user_id}/meal-plans", get(meal_plan::list))
        .with_state(app_state)
}
