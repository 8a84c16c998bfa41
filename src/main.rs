use price_lib::{config, routes, state::AppState};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Price Hub...");

    let service_config = config::resolve_config()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    if let Err(val_errors) = config::validation::validate_service_config(&service_config) {
        error!("Configuration is invalid: {:?}. Halting.", val_errors);
        return Err(anyhow::anyhow!("Invalid configuration: {:?}", val_errors));
    }

    info!(
        "Loading artifacts from {}",
        service_config.artifacts.dir.display()
    );
    let app_state = Arc::new(AppState::new(service_config).map_err(|e| {
        error!("Failed to load artifacts: {}. Halting.", e);
        anyhow::anyhow!("Failed to load artifacts: {}", e)
    })?);

    let app_with_tracing = routes::create_router(app_state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(()),
    );

    let port_str = config::constants::port();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port_str))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", port_str, e))?;

    info!("Server is running on port {}", port_str);
    axum::serve(listener, app_with_tracing.into_make_service()).await?;

    Ok(())
}
