use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod routes;
mod state;

use mlboard_core::{AppConfig, ScriptRunner};
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("mlboard=info".parse().expect("valid log directive")),
        )
        .init();

    let config = AppConfig::from_env();
    if let Err(e) = config.validate() {
        tracing::warn!("{e}; task runs will fail until this is fixed");
    }

    let state = AppState {
        runner: Arc::new(ScriptRunner::new(&config)),
    };

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!(
        python = %config.python_bin,
        scripts_dir = %config.scripts_dir.display(),
        "mlboard server listening on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}
