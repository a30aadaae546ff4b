use std::sync::Arc;

use tower_http::cors::CorsLayer;

use voicebot_backend::config::Config;
use voicebot_backend::routes;
use voicebot_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not configured, serving placeholder replies");
    }

    let state = Arc::new(AppState::from_config(&config));

    let cors = CorsLayer::very_permissive();
    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("voice assistant listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
