use std::sync::Mutex;

use bepviet_shared::{
    mealplan::MealPlan,
    recipe::{Favorite, Recipe, Tag},
};
use serde::{Deserialize, Serialize};

/// Read-only view of recipes, tags and favorites the planner draws from.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    async fn list_published_recipes(&self) -> anyhow::Result<Vec<Recipe>>;

    async fn list_all_tags(&self) -> anyhow::Result<Vec<Tag>>;

    async fn list_favorites_for_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>>;
}

#[async_trait::async_trait]
pub trait MealPlanStore: Send + Sync {
    /// Stores the plans and returns them with their ids set.
    async fn persist_meal_plans(&self, plans: Vec<MealPlan>) -> anyhow::Result<Vec<MealPlan>>;
}

/// Catalog held in memory. Also the shape of catalog import files.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryCatalog {
    pub tags: Vec<Tag>,
    pub recipes: Vec<Recipe>,
    pub favorites: Vec<Favorite>,
}

#[async_trait::async_trait]
impl Catalog for InMemoryCatalog {
    async fn list_published_recipes(&self) -> anyhow::Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.is_published())
            .cloned()
            .collect())
    }

    async fn list_all_tags(&self) -> anyhow::Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    async fn list_favorites_for_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>> {
        Ok(self
            .favorites
            .iter()
            .filter(|favorite| favorite.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    plans: Mutex<Vec<MealPlan>>,
}

impl InMemoryStore {
    pub fn plans(&self) -> anyhow::Result<Vec<MealPlan>> {
        let plans = self
            .plans
            .lock()
            .map_err(|err| anyhow::anyhow!("meal plan store poisoned: {err}"))?;

        Ok(plans.clone())
    }
}

#[async_trait::async_trait]
impl MealPlanStore for InMemoryStore {
    async fn persist_meal_plans(&self, plans: Vec<MealPlan>) -> anyhow::Result<Vec<MealPlan>> {
        let plans = plans
            .into_iter()
            .map(|plan| MealPlan {
                id: Some(ulid::Ulid::new().to_string()),
                ..plan
            })
            .collect::<Vec<_>>();

        self.plans
            .lock()
            .map_err(|err| anyhow::anyhow!("meal plan store poisoned: {err}"))?
            .extend(plans.iter().cloned());

        Ok(plans)
    }
}
