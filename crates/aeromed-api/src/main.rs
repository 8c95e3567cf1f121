use tracing_subscriber::EnvFilter;

use aeromed_api::config::ApiConfig;
use aeromed_api::router;
use aeromed_api::state::AppState;
use aeromed_store::seed::Seed;
use aeromed_store::Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let store = match &config.seed_file {
        Some(path) => {
            let seed = Seed::load(path)?;
            tracing::info!(
                path = %path.display(),
                users = seed.users.len(),
                bases = seed.bases.len(),
                "loading seed data"
            );
            Store::from_seed(seed).await?
        }
        None => {
            tracing::warn!("no seed file configured, starting with an empty store");
            Store::new()
        }
    };

    let state = AppState::new(store, config.jwt_secret.as_bytes());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "aeromed api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
