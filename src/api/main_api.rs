use std::sync::Arc;
use log::info;
use tower_http::cors::CorsLayer;
use crate::api::endpoints::addon_api::addon_api_register;
use crate::api::model::app_state::AppState;
use crate::api::scheduler::start_keep_alive;
use crate::model::config::Config;

pub fn create_router(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .merge(addon_api_register())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => { signal.recv().await; }
            Err(err) => {
                log::error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutting down");
}

pub async fn start_server(cfg: Arc<Config>) -> std::io::Result<()> {
    let host = cfg.api.host.to_string();
    let port = cfg.api.port;

    let app_state = AppState::new(Arc::clone(&cfg)).map_err(std::io::Error::other)?;

    if let Some(expression) = cfg.keep_alive.clone() {
        tokio::spawn(start_keep_alive(expression));
    }

    let router = create_router(Arc::new(app_state));
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!("Addon running at http://{host}:{port}/manifest.json");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
