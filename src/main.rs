use anyhow::Result;
use auth_register::{auth::HttpAuthService, config, handlers};
use clap::Parser;
use config::Config;
use handlers::AppState;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_register=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Parse configuration from CLI args and environment variables
    let config = Config::parse();

    let auth = HttpAuthService::new(&config.auth_api_url, config.get_auth_api_timeout())?;
    tracing::info!("🔐 Auth service endpoint: {}", auth.register_url());

    let app_state = Arc::new(AppState {
        auth: Arc::new(auth),
    });

    let app = handlers::router(app_state)
        // Static files
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.get_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 Registration pages listening on http://{}/auth/register", addr);
    tracing::info!(
        "⚙️  Auth API timeout: {}s",
        config.auth_api_timeout_secs
    );

    axum::serve(listener, app).await?;

    Ok(())
}
