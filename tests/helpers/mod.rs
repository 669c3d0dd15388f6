use std::path::Path;

use bepviet::{
    AppState,
    config::{Config, DatabaseConfig, ObservabilityConfig, PlannerConfig, ServerConfig},
};
use bepviet_mealplan::InMemoryCatalog;

pub fn test_config(path: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: format!("sqlite:{}", path.display()),
            max_connections: 2,
        },
        planner: PlannerConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Migrated database under `dir`, loaded with `demos/catalog.json` when `seeded`.
pub async fn setup_app_state(dir: &temp_dir::TempDir, seeded: bool) -> anyhow::Result<AppState> {
    let config = test_config(&dir.child("bepviet.db"));
    let pool = bepviet::db::create_pool(&config.database.url, 2).await?;
    bepviet::db::migrate(&pool).await?;

    if seeded {
        bepviet_mealplan::sqlite::import(&pool, &demo_catalog()?).await?;
    }

    Ok(AppState::new(
        config,
        bepviet_shared::State {
            read_db: pool.clone(),
            write_db: pool,
        },
    ))
}

pub fn demo_catalog() -> anyhow::Result<InMemoryCatalog> {
    let content = std::fs::read_to_string("demos/catalog.json")?;
    Ok(serde_json::from_str(&content)?)
}
