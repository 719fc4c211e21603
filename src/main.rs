use flyby_rs::{config, state};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flyby_rs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    let addr = format!("127.0.0.1:{}", config.port);
    tracing::info!("Using Strava API at {}", config.strava_api_base);

    let state = state::AppState::new(config)?;

    let app = flyby_rs::router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("flyby-rs listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Activities: GET http://{}/api/activities", addr);
    tracing::info!("Compare: POST http://{}/api/compare", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
