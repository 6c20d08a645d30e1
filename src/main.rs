use std::sync::Arc;

use courtside::{router, AppState, Config, InMemoryGameRepository};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtside=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        default_roster_size = config.default_roster_size,
        "Starting live scoring server"
    );

    let game_repository = Arc::new(InMemoryGameRepository::new());
    let app_state =
        AppState::new(game_repository).with_default_roster_size(config.default_roster_size);

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
