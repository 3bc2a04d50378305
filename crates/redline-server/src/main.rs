use redline_server::api::AppState;
use redline_server::app;
use redline_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,redline_server=debug".into()),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting Redline server");

    let config = ServerConfig::load().expect("Failed to load server configuration");

    // The model credential is resolved per request, not checked here.
    let state = AppState::from_env();
    let app = app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Redline running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
