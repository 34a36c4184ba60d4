use super::routes::{RouteTable, RouteTableError};
use super::state::AppState;
use super::static_file_handler;
use crate::ServerConfig;
use axum::Router;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    InvalidAddress(#[from] AddrParseError),

    #[error(transparent)]
    Routes(#[from] RouteTableError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Builds the device router: the route table for the configured button mode, the
/// static file fallback, and the layers shared by every response.
///
/// A known path requested with another method goes to the static fallback as well.
pub fn build_router(state: AppState) -> Result<Router, RouteTableError> {
    let table = RouteTable::for_mode(state.button_mode);
    table.validate()?;

    let mut router = Router::new();
    for route in table.routes() {
        router = router.route(route.path, route.method_router());
    }

    let router = router
        .method_not_allowed_fallback(static_file_handler)
        .fallback(static_file_handler)
        .with_state(state);

    Ok(with_service_layers(router))
}

/// Requests are handled one at a time across all routes and the fallback.
fn with_service_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(GlobalConcurrencyLimitLayer::new(1)),
    )
}

pub async fn create_server(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    info!(
        "Starting web server (button mode: {}, root: {})",
        state.button_mode,
        config.root.display()
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = build_router(state)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    println!("🌐 Web server started successfully!");
    println!("   URL: http://{addr}");
    println!("   Press Ctrl+C to stop");

    axum::serve(listener, app).await.map_err(ServerError::Serve)?;

    Ok(())
}
