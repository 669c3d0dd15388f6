use std::path::Path;

use anyhow::{Context, Result};
use bepviet_mealplan::InMemoryCatalog;

/// Loads a JSON catalog (`tags`, `recipes`, `favorites`) into the database.
pub async fn import(config: &crate::config::Config, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let catalog: InMemoryCatalog = serde_json::from_str(&content)
        .with_context(|| format!("invalid catalog file {}", path.display()))?;

    let pool = crate::db::create_write_pool(&config.database.url).await?;
    crate::db::migrate(&pool).await?;
    bepviet_mealplan::sqlite::import(&pool, &catalog).await?;
    pool.close().await;

    Ok(())
}
