//! Commercial dashboard - serves the dashboard shell and the commercial module.

use std::sync::Arc;

use tokio::net::TcpListener;

use commercial_dashboard::{app, logging, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load().map_err(|e| {
        format!(
            "Failed to load configuration: {}. \
             Make sure config.toml exists or set DASHBOARD__FIREBASE__API_KEY and DASHBOARD__FIREBASE__PROJECT_ID.",
            e
        )
    })?;

    // Initialize tracing
    logging::init(&config.logging.level);

    tracing::info!(
        "Starting commercial dashboard for Firebase project {}",
        config.firebase.project_id
    );

    let state = Arc::new(AppState::from_config(&config)?);

    // Keep a log line per identity change for the lifetime of the server
    let _session_log = state.auth.on_auth_state_change(|user| match user {
        Some(user) => tracing::info!(user_id = %user.id, "Session opened"),
        None => tracing::info!("No active session"),
    });

    let app = app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
