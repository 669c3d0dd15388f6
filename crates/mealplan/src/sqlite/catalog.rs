use std::{collections::HashMap, str::FromStr};

use bepviet_db::table;
use bepviet_shared::recipe::{
    Favorite, Ingredient, Recipe, RecipeStatus, Tag, TagCategory,
};
use sea_query::{
    Expr, ExprTrait, IntoColumnRef, Order, Query, SelectStatement, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::Catalog;

#[derive(FromRow)]
struct TagRow {
    id: String,
    name: String,
    category: String,
}

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    title: String,
}

#[derive(FromRow)]
struct RecipeTagRow {
    recipe_id: String,
    tag_id: String,
}

#[derive(FromRow)]
struct IngredientRow {
    recipe_id: String,
    name: String,
    quantity: String,
}

#[derive(FromRow)]
struct FavoriteRow {
    recipe_id: String,
}

/// Catalog reading the recipe tables.
#[derive(Clone)]
pub struct SqliteCatalog(pub SqlitePool);

fn published_ids() -> SelectStatement {
    Query::select()
        .column(table::Recipe::Id)
        .from(table::Recipe::Table)
        .and_where(Expr::col(table::Recipe::Status).eq(RecipeStatus::Published.to_string()))
        .to_owned()
}

fn favorite_ids(user_id: &str) -> SelectStatement {
    Query::select()
        .column(table::Favorite::RecipeId)
        .from(table::Favorite::Table)
        .and_where(Expr::col(table::Favorite::UserId).eq(user_id))
        .to_owned()
}

impl SqliteCatalog {
    async fn recipe_tags(&self, recipe_ids: SelectStatement) -> anyhow::Result<Vec<RecipeTagRow>> {
        let statement = Query::select()
            .columns([table::RecipeTag::RecipeId, table::RecipeTag::TagId])
            .from(table::RecipeTag::Table)
            .and_where(
                table::RecipeTag::RecipeId
                    .into_column_ref()
                    .in_subquery(recipe_ids),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeTagRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}

#[async_trait::async_trait]
impl Catalog for SqliteCatalog {
    async fn list_published_recipes(&self) -> anyhow::Result<Vec<Recipe>> {
        let statement = Query::select()
            .columns([table::Recipe::Id, table::Recipe::Title])
            .from(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::Status).eq(RecipeStatus::Published.to_string()))
            .order_by(table::Recipe::CreatedAt, Order::Asc)
            .order_by(table::Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut recipes = rows
            .into_iter()
            .map(|row| Recipe {
                id: row.id,
                title: row.title,
                tag_ids: Default::default(),
                ingredients: vec![],
                status: RecipeStatus::Published,
            })
            .collect::<Vec<_>>();

        let positions = recipes
            .iter()
            .enumerate()
            .map(|(pos, recipe)| (recipe.id.to_owned(), pos))
            .collect::<HashMap<_, _>>();

        for row in self.recipe_tags(published_ids()).await? {
            if let Some(pos) = positions.get(&row.recipe_id) {
                recipes[*pos].tag_ids.insert(row.tag_id);
            }
        }

        let statement = Query::select()
            .columns([
                table::RecipeIngredient::RecipeId,
                table::RecipeIngredient::Name,
                table::RecipeIngredient::Quantity,
            ])
            .from(table::RecipeIngredient::Table)
            .and_where(
                table::RecipeIngredient::RecipeId
                    .into_column_ref()
                    .in_subquery(published_ids()),
            )
            .order_by(table::RecipeIngredient::RecipeId, Order::Asc)
            .order_by(table::RecipeIngredient::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        for row in rows {
            if let Some(pos) = positions.get(&row.recipe_id) {
                recipes[*pos].ingredients.push(Ingredient {
                    name: row.name,
                    quantity: row.quantity,
                });
            }
        }

        Ok(recipes)
    }

    async fn list_all_tags(&self) -> anyhow::Result<Vec<Tag>> {
        let statement = Query::select()
            .columns([table::Tag::Id, table::Tag::Name, table::Tag::Category])
            .from(table::Tag::Table)
            .order_by(table::Tag::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, TagRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Tag {
                category: TagCategory::from_str(&row.category).unwrap_or_else(|_| {
                    tracing::warn!(tag = row.id, category = row.category, "unknown tag category");
                    TagCategory::Other
                }),
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn list_favorites_for_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>> {
        let statement = Query::select()
            .column(table::Favorite::RecipeId)
            .from(table::Favorite::Table)
            .and_where(Expr::col(table::Favorite::UserId).eq(user_id))
            .order_by(table::Favorite::CreatedAt, Order::Asc)
            .order_by(table::Favorite::RecipeId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, FavoriteRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut favorites = rows
            .into_iter()
            .map(|row| Favorite {
                user_id: user_id.to_owned(),
                recipe_id: row.recipe_id,
                tag_ids: Default::default(),
            })
            .collect::<Vec<_>>();

        let positions = favorites
            .iter()
            .enumerate()
            .map(|(pos, favorite)| (favorite.recipe_id.to_owned(), pos))
            .collect::<HashMap<_, _>>();

        for row in self.recipe_tags(favorite_ids(user_id)).await? {
            if let Some(pos) = positions.get(&row.recipe_id) {
                favorites[*pos].tag_ids.insert(row.tag_id);
            }
        }

        Ok(favorites)
    }
}
