mod config;
mod handlers;
mod services;

use std::sync::Arc;

use tokio::signal;

use tally::errors::Report;
use tally::log;

use crate::config::Config;
use crate::services::{DatasetStore, FsDatasetStore};

/// Shared state handed to every handler.
pub struct AppState {
    pub datasets: Box<dyn DatasetStore>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(datasets: impl DatasetStore + 'static) -> Self {
        Self {
            datasets: Box::new(datasets),
            started_at: chrono::Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    tally::log::setup()?;

    let config = Config::from_env()?;
    log::info!("Serving datasets from {}", config.data_dir.display());
    log::info!("Serving frontend from {}", config.dist_dir.display());

    let state = Arc::new(AppState::new(FsDatasetStore::new(&config.data_dir)));
    let app = routes::setup_routes(state, &config);

    // Setup the server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    log::info!(
        "Starting server on http://{}{}",
        listener.local_addr()?,
        config.base_path.as_deref().unwrap_or("/")
    );
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                log::error!("Failed to install signal handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}

mod routes {
    use std::sync::Arc;

    use axum::{Router, http::Method, routing::get};
    use tower_http::cors::{AllowOrigin, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};
    use tower_http::trace::TraceLayer;

    use super::{AppState, handlers};
    use crate::config::Config;

    fn cors() -> CorsLayer {
        let origins = if cfg!(debug_assertions) {
            let dev_ports = vec![3000, 8000, 8080, 8081, 5173];
            let mut allowed_origins = Vec::new();
            for port in dev_ports {
                allowed_origins.push(format!("http://localhost:{port}"));
                allowed_origins.push(format!("http://127.0.0.1:{port}"));
            }
            allowed_origins
        } else {
            // Production origins - add your domains here
            vec![]
        };

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(
                origins.iter().filter_map(|origin| origin.parse().ok()),
            ))
            .allow_methods([Method::GET])
    }

    /// Setup the routes for the server, mounted under the configured base path
    pub fn setup_routes(state: Arc<AppState>, config: &Config) -> Router {
        // Unknown paths get index.html so the client router can resolve them
        let index = ServeFile::new(config.dist_dir.join("index.html"));
        let frontend = ServeDir::new(&config.dist_dir).fallback(index.clone());

        let app = Router::new()
            .route("/api/{file}", get(handlers::datasets::get))
            .route("/health", get(handlers::health::get))
            .fallback_service(frontend)
            .with_state(state);

        let app = match &config.base_path {
            // `nest` covers `{base}` and `{base}/...` but not `{base}/` itself,
            // which is where the router's basename puts the root route
            Some(base_path) => Router::new()
                .route_service(&format!("{base_path}/"), index)
                .nest(base_path, app),
            None => app,
        };

        app.layer(cors()).layer(TraceLayer::new_for_http())
    }
}
