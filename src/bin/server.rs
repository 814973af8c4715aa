//! Server binary: opens the SQLite pool, ensures tables exist, and serves
//! the product/user CRUD routes until ctrl-c.

use storefront::{
    common_routes_with_ready, connect, ensure_tables, product_routes, user_routes, AppState,
    Settings,
};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = connect(&settings.database_url).await?;
    ensure_tables(&pool).await?;
    let state = AppState { pool: pool.clone() };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(product_routes(state.clone()))
        .merge(user_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}
