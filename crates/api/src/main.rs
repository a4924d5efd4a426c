use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubescript_api::{build_router, state::AppState};
use tubescript_config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "tubescript_api=debug,tubescript_services=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let settings = Settings::load()?;
    info!("Starting Tubescript API on {}:{}", settings.app.host, settings.app.port);
    info!(
        provider = %settings.provider.base_url,
        timeout_secs = ?settings.provider.timeout_secs,
        service = %settings.app.service_name,
        "Transcript provider config"
    );

    let addr = format!("{}:{}", settings.app.host, settings.app.port);

    let app_state = AppState::new(settings)?;
    let app = build_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
