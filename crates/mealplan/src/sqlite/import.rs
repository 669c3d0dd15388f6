use bepviet_db::table;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};
use time::OffsetDateTime;

use crate::InMemoryCatalog;

/// Upserts tags, recipes and favorites in one transaction.
///
/// A recipe's tags and ingredients are replaced by the imported ones. Recipes keep the
/// order they have in `catalog`.
pub async fn import(pool: &SqlitePool, catalog: &InMemoryCatalog) -> anyhow::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let mut tx = pool.begin().await?;

    for tag in &catalog.tags {
        let statement = Query::insert()
            .into_table(table::Tag::Table)
            .columns([table::Tag::Id, table::Tag::Name, table::Tag::Category])
            .values_panic([
                tag.id.to_owned().into(),
                tag.name.to_owned().into(),
                tag.category.to_string().into(),
            ])
            .on_conflict(
                OnConflict::column(table::Tag::Id)
                    .update_columns([table::Tag::Name, table::Tag::Category])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
    }

    for (pos, recipe) in catalog.recipes.iter().enumerate() {
        let statement = Query::insert()
            .into_table(table::Recipe::Table)
            .columns([
                table::Recipe::Id,
                table::Recipe::Title,
                table::Recipe::Status,
                table::Recipe::CreatedAt,
            ])
            .values_panic([
                recipe.id.to_owned().into(),
                recipe.title.to_owned().into(),
                recipe.status.to_string().into(),
                (now + pos as i64).into(),
            ])
            .on_conflict(
                OnConflict::column(table::Recipe::Id)
                    .update_columns([table::Recipe::Title, table::Recipe::Status])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        replace_links(&mut tx, recipe).await?;
    }

    for favorite in &catalog.favorites {
        let statement = Query::insert()
            .into_table(table::Favorite::Table)
            .columns([
                table::Favorite::UserId,
                table::Favorite::RecipeId,
                table::Favorite::CreatedAt,
            ])
            .values_panic([
                favorite.user_id.to_owned().into(),
                favorite.recipe_id.to_owned().into(),
                now.into(),
            ])
            .on_conflict(
                OnConflict::columns([table::Favorite::UserId, table::Favorite::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    tracing::info!(
        tags = catalog.tags.len(),
        recipes = catalog.recipes.len(),
        favorites = catalog.favorites.len(),
        "catalog imported"
    );

    Ok(())
}

async fn replace_links(
    conn: &mut SqliteConnection,
    recipe: &bepviet_shared::recipe::Recipe,
) -> anyhow::Result<()> {
    let statement = Query::delete()
        .from_table(table::RecipeTag::Table)
        .and_where(Expr::col(table::RecipeTag::RecipeId).eq(&recipe.id))
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    let statement = Query::delete()
        .from_table(table::RecipeIngredient::Table)
        .and_where(Expr::col(table::RecipeIngredient::RecipeId).eq(&recipe.id))
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    if !recipe.tag_ids.is_empty() {
        let mut statement = Query::insert()
            .into_table(table::RecipeTag::Table)
            .columns([table::RecipeTag::RecipeId, table::RecipeTag::TagId])
            .to_owned();

        for tag_id in &recipe.tag_ids {
            statement.values_panic([recipe.id.to_owned().into(), tag_id.to_owned().into()]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;
    }

    if !recipe.ingredients.is_empty() {
        let mut statement = Query::insert()
            .into_table(table::RecipeIngredient::Table)
            .columns([
                table::RecipeIngredient::RecipeId,
                table::RecipeIngredient::Position,
                table::RecipeIngredient::Name,
                table::RecipeIngredient::Quantity,
            ])
            .to_owned();

        for (position, ingredient) in recipe.ingredients.iter().enumerate() {
            statement.values_panic([
                recipe.id.to_owned().into(),
                (position as i32).into(),
                ingredient.name.to_owned().into(),
                ingredient.quantity.to_owned().into(),
            ]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;
    }

    Ok(())
}
