use std::collections::{HashMap, HashSet};

use bepviet_shared::{
    mealplan::MealPlan,
    recipe::{Favorite, Recipe, Tag},
};
use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use validator::Validate;

use crate::{
    Catalog, Constraints, DayContext, MealPlanError, MealPlanStore, Picker, Result, candidates,
    plan_day, preferred_tags, rank, resolve,
};

pub const DEFAULT_DAYS: u16 = 7;
pub const MAX_DAYS: u16 = 90;

fn default_days() -> u16 {
    DEFAULT_DAYS
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecommendInput {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[serde(default = "default_days")]
    #[validate(range(min = 1, max = 90))]
    pub days: u16,
    #[serde(default)]
    #[validate(nested)]
    pub constraints: Constraints,
}

impl RecommendInput {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            days: DEFAULT_DAYS,
            constraints: Constraints::default(),
        }
    }
}

/// What the planner reads from the catalog for one run.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub tags: Vec<Tag>,
    pub recipes: Vec<Recipe>,
    pub favorites: Vec<Favorite>,
}

/// Builds `input.days` consecutive plans starting at `start`.
///
/// A recipe placed in any meal is never placed again within the run, whatever the
/// strategy. The result depends only on the arguments and the picker's draws.
pub fn assemble<P: Picker>(
    input: &RecommendInput,
    start: Date,
    snapshot: &Snapshot,
    picker: &mut P,
) -> Vec<MealPlan> {
    let constraints = &input.constraints;
    let resolved = resolve(constraints, &snapshot.tags);
    let preferred = preferred_tags(&snapshot.favorites);
    let favorites = favorite_recipes(&snapshot.recipes, &snapshot.favorites);

    let mut used = HashSet::new();
    let mut plans = Vec::with_capacity(input.days.into());
    let mut date = start;

    for day in 0..input.days {
        let ranked = rank(candidates(&snapshot.recipes, &resolved, &used), &preferred);
        tracing::debug!(day, %date, candidates = ranked.len(), "planning day");

        let ctx = DayContext {
            constraints,
            resolved: &resolved,
            candidates: &ranked,
            favorites: &favorites,
            catalog: &snapshot.recipes,
        };
        let picks = plan_day(&ctx, &mut used, picker);

        plans.push(MealPlan::new(
            input.user_id.to_owned(),
            constraints.plan_type,
            date,
            picks,
        ));

        date = date.saturating_add(Duration::DAY);
    }

    plans
}

/// Published recipes the user marked as favorite, in favorite order, without duplicates.
fn favorite_recipes<'a>(recipes: &'a [Recipe], favorites: &[Favorite]) -> Vec<&'a Recipe> {
    let by_id = recipes
        .iter()
        .filter(|recipe| recipe.is_published())
        .map(|recipe| (recipe.id.as_str(), recipe))
        .collect::<HashMap<_, _>>();

    let mut seen = HashSet::new();
    favorites
        .iter()
        .filter_map(|favorite| by_id.get(favorite.recipe_id.as_str()).copied())
        .filter(|recipe| seen.insert(recipe.id.as_str()))
        .collect()
}

/// Meal plan recommendation service over a catalog and a plan store.
pub struct Planner<C, S> {
    catalog: C,
    store: S,
    tags: Option<Vec<Tag>>,
}

impl<C: Catalog, S: MealPlanStore> Planner<C, S> {
    pub fn new(catalog: C, store: S) -> Self {
        Self {
            catalog,
            store,
            tags: None,
        }
    }

    /// Uses an already fetched tag catalog instead of querying it.
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub async fn snapshot(&self, user_id: &str) -> Result<Snapshot> {
        let tags = match &self.tags {
            Some(tags) => tags.clone(),
            None => self
                .catalog
                .list_all_tags()
                .await
                .map_err(unavailable("tags"))?,
        };

        let recipes = self
            .catalog
            .list_published_recipes()
            .await
            .map_err(unavailable("recipes"))?;

        let favorites = self
            .catalog
            .list_favorites_for_user(user_id)
            .await
            .map_err(unavailable("favorites"))?;

        Ok(Snapshot {
            tags,
            recipes,
            favorites,
        })
    }

    #[tracing::instrument(
        skip_all,
        fields(user_id = %input.user_id, days = input.days, start = %start, save = input.constraints.save)
    )]
    pub async fn recommend<P: Picker>(
        &self,
        input: RecommendInput,
        start: Date,
        picker: &mut P,
    ) -> Result<Vec<MealPlan>> {
        input.validate()?;

        let snapshot = self.snapshot(&input.user_id).await?;
        tracing::info!(
            tags = snapshot.tags.len(),
            recipes = snapshot.recipes.len(),
            favorites = snapshot.favorites.len(),
            "catalog snapshot loaded"
        );

        let plans = assemble(&input, start, &snapshot, picker);

        if !input.constraints.save {
            return Ok(plans);
        }

        let plans = self.store.persist_meal_plans(plans).await.map_err(|err| {
            tracing::error!(error = %err, "failed to persist meal plans");
            MealPlanError::Persist(err)
        })?;

        tracing::info!(plans = plans.len(), "meal plans saved");

        Ok(plans)
    }
}

fn unavailable(what: &'static str) -> impl Fn(anyhow::Error) -> MealPlanError {
    move |err| {
        tracing::error!(error = %err, "failed to load {what}");
        MealPlanError::PlanningUnavailable(err.context(format!("failed to load {what}")))
    }
}
