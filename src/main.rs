use std::path::PathBuf;

use anyhow::Result;
use bepviet::cli::plan::PlanArgs;
use clap::{Parser, Subcommand};

/// bepviet - Vietnamese home cooking meal plans
#[derive(Parser)]
#[command(name = "bepviet")]
#[command(about = "Recommend balanced meal plans from the recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Load tags, recipes and favorites from a JSON file
    Import {
        path: PathBuf,
    },
    /// Print meal plans for a user as JSON
    Plan(PlanArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = bepviet::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    bepviet::observability::init_observability(
        "bepviet",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => bepviet::cli::server::serve(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Import { path } => bepviet::cli::import::import(&config, &path).await,
        Commands::Plan(args) => plan_command(config, args).await,
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: bepviet::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = bepviet::db::create_write_pool(&config.database.url).await?;
    bepviet::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: bepviet::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    bepviet::db::reset(&config.database.url).await?;

    tracing::info!("Database reset completed successfully");
    Ok(())
}

#[tracing::instrument(skip_all, fields(user_id = %args.user))]
async fn plan_command(config: bepviet::Config, args: PlanArgs) -> Result<()> {
    let plans = bepviet::cli::plan::plan(&config, args).await?;
    println!("{}", serde_json::to_string_pretty(&plans)?);
    Ok(())
}
