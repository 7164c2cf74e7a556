use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use lyb::shell::config::Config;
use lyb::shell::http::router;
use lyb::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).context("invalid RUST_LOG")?)
        .init();

    let state = AppState::in_memory(config.max_page_size);

    let mut app = router(state).layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    tracing::info!("REST endpoint: http://{}/lybs", config.bind_address);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_address);
    axum::serve(listener, app).await?;
    Ok(())
}
