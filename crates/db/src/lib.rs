use sqlx_migrator::{Info, Migrator};

mod m0001;
pub mod table;

pub fn migrator<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    m0001::Migration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::<DB>::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx_migrator::{Migrate, Plan};
    use std::str::FromStr;
    use temp_dir::TempDir;

    #[tokio::test]
    async fn test_migrate_up_and_down() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.child("db.sqlite3");
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        let mut conn = pool.acquire().await?;

        let migrator = super::migrator::<sqlx::Sqlite>()?;
        migrator.run(&mut conn, &Plan::apply_all()).await?;

        let tables = sqlx::query_as::<_, (String,)>(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('tag', 'recipe', 'recipe_tag', 'recipe_ingredient', 'favorite', 'meal_plan', 'meal_plan_meal')",
        )
        .fetch_all(&mut *conn)
        .await?;
        assert_eq!(tables.len(), 7);

        migrator.run(&mut conn, &Plan::revert_all()).await?;

        let tables = sqlx::query_as::<_, (String,)>(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'meal_plan'",
        )
        .fetch_all(&mut *conn)
        .await?;
        assert!(tables.is_empty());

        Ok(())
    }
}
