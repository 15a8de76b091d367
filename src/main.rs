//! Pace Timer - A shared pace clock with segment progress
//!
//! This is the main entry point for the pace-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use pace_timer::{
    api::create_router,
    config::Config,
    state::{AppState, SettingsStore},
    tasks::display_loop_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pace_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pace-timer server v{}", env!("CARGO_PKG_VERSION"));

    // A missing or unreadable settings file falls back to defaults
    let store = SettingsStore::new(&config.config_file);
    let from_file = match store.load().await {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Could not load {}: {}, using defaults", store.path().display(), e);
            None
        }
    };
    let settings = config.resolve_settings(from_file)?;

    info!(
        "Configuration: host={}, port={}, total={}s, ends={}, fps={}",
        config.host,
        config.port,
        settings.total_seconds.get(),
        settings.num_ends.get(),
        config.fps
    );

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), settings, store));

    // Start the display loop background task
    let display_state = Arc::clone(&state);
    let screen = config.screen();
    let fps = config.fps;
    tokio::spawn(async move {
        display_loop_task(display_state, screen, fps).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /status                       - Clock snapshot");
    info!("  POST /reset | /pause | /resume     - Timer control");
    info!("  POST /set_remaining?seconds=|time= - Set remaining time");
    info!("  POST /set_total?seconds=|time=     - Set total duration");
    info!("  POST /set_ends?count=N             - Set number of ends");
    info!("  POST /add_time | /subtract_time    - Adjust by one minute");
    info!("  GET|POST /config, GET /debug       - Settings");
    info!("  GET  /frame | /view | /health      - Display and health");
    info!("  GET  /configure                    - Settings form");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
