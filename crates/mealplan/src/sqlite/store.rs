use std::{collections::HashMap, str::FromStr};

use bepviet_db::table;
use bepviet_shared::mealplan::{Meal, MealPlan, MealTime, PlanType};
use sea_query::{Expr, ExprTrait, IntoColumnRef, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::MealPlanStore;

#[derive(FromRow)]
struct MealPlanRow {
    id: String,
    user_id: String,
    plan_type: String,
    date: String,
}

#[derive(FromRow)]
struct MealRow {
    meal_plan_id: String,
    meal_time: String,
    recipe_id: Option<String>,
}

/// Meal plan storage in the `meal_plan` and `meal_plan_meal` tables.
#[derive(Clone)]
pub struct SqliteMealPlanStore(pub SqlitePool);

impl SqliteMealPlanStore {
    /// Saved plans of a user, most recent date first.
    pub async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<MealPlan>> {
        let statement = Query::select()
            .columns([
                table::MealPlan::Id,
                table::MealPlan::UserId,
                table::MealPlan::PlanType,
                table::MealPlan::Date,
            ])
            .from(table::MealPlan::Table)
            .and_where(Expr::col(table::MealPlan::UserId).eq(user_id))
            .order_by(table::MealPlan::Date, Order::Desc)
            .order_by(table::MealPlan::CreatedAt, Order::Desc)
            .order_by(table::MealPlan::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut plans = Vec::with_capacity(rows.len());
        for row in rows {
            plans.push(MealPlan {
                plan_type: PlanType::from_str(&row.plan_type)
                    .map_err(|err| anyhow::anyhow!("plan {}: {err}", row.id))?,
                date: bepviet_shared::parse_date(&row.date)?,
                id: Some(row.id),
                user_id: row.user_id,
                meals: vec![],
            });
        }

        let positions = plans
            .iter()
            .enumerate()
            .filter_map(|(pos, plan)| plan.id.to_owned().map(|id| (id, pos)))
            .collect::<HashMap<_, _>>();

        let plan_ids = Query::select()
            .column(table::MealPlan::Id)
            .from(table::MealPlan::Table)
            .and_where(Expr::col(table::MealPlan::UserId).eq(user_id))
            .to_owned();

        let statement = Query::select()
            .columns([
                table::MealPlanMeal::MealPlanId,
                table::MealPlanMeal::MealTime,
                table::MealPlanMeal::RecipeId,
            ])
            .from(table::MealPlanMeal::Table)
            .and_where(
                table::MealPlanMeal::MealPlanId
                    .into_column_ref()
                    .in_subquery(plan_ids),
            )
            .order_by(table::MealPlanMeal::MealPlanId, Order::Asc)
            .order_by(table::MealPlanMeal::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        for row in rows {
            let Some(pos) = positions.get(&row.meal_plan_id) else {
                continue;
            };

            plans[*pos].meals.push(Meal {
                meal_time: MealTime::from_str(&row.meal_time)
                    .map_err(|err| anyhow::anyhow!("plan {}: {err}", row.meal_plan_id))?,
                recipe_id: row.recipe_id,
            });
        }

        Ok(plans)
    }
}

#[async_trait::async_trait]
impl MealPlanStore for SqliteMealPlanStore {
    async fn persist_meal_plans(&self, plans: Vec<MealPlan>) -> anyhow::Result<Vec<MealPlan>> {
        let created_at = OffsetDateTime::now_utc().unix_timestamp();
        let mut saved = Vec::with_capacity(plans.len());
        let mut tx = self.0.begin().await?;

        for plan in plans {
            let id = Ulid::new().to_string();

            let statement = Query::insert()
                .into_table(table::MealPlan::Table)
                .columns([
                    table::MealPlan::Id,
                    table::MealPlan::UserId,
                    table::MealPlan::PlanType,
                    table::MealPlan::Date,
                    table::MealPlan::CreatedAt,
                ])
                .values_panic([
                    id.to_owned().into(),
                    plan.user_id.to_owned().into(),
                    plan.plan_type.to_string().into(),
                    bepviet_shared::format_date(plan.date)?.into(),
                    created_at.into(),
                ])
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            let mut statement = Query::insert()
                .into_table(table::MealPlanMeal::Table)
                .columns([
                    table::MealPlanMeal::MealPlanId,
                    table::MealPlanMeal::Position,
                    table::MealPlanMeal::MealTime,
                    table::MealPlanMeal::RecipeId,
                ])
                .to_owned();

            for (position, meal) in plan.meals.iter().enumerate() {
                statement.values_panic([
                    id.to_owned().into(),
                    (position as i32).into(),
                    meal.meal_time.to_string().into(),
                    meal.recipe_id.to_owned().into(),
                ]);
            }

            if !plan.meals.is_empty() {
                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                sqlx::query_with(&sql, values).execute(&mut *tx).await?;
            }

            saved.push(MealPlan {
                id: Some(id),
                ..plan
            });
        }

        tx.commit().await?;

        tracing::debug!(plans = saved.len(), "meal plans persisted");

        Ok(saved)
    }
}
