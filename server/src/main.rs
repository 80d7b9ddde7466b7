use clap::Parser;
use database::{create_schema, seed_brands, DatabaseConfig, GameStore};
use dotenv::dotenv;
use env_logger::Env;
use server::{AppState, Cli, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::load(Cli::parse());

    let db_config = DatabaseConfig::from_cli_or_env_or_yaml(config.database_url.clone(), None);
    let pool = db_config.create_pool().await?;
    create_schema(&pool).await?;

    if config.seed_path.exists() {
        let count = seed_brands(&pool, &config.seed_path).await?;
        log::info!("Brand catalog ready ({count} brands)");
    } else {
        log::warn!(
            "Seed file {} not found, keeping the existing catalog",
            config.seed_path.display()
        );
    }

    let state = AppState::new(GameStore::new(pool), config.logo_api_key.clone());
    let app = server::router(state);

    log::info!("Starting server at {}", config.addr);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
