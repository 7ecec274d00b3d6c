use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use lantern_api::middleware::require_auth;
use lantern_api::state::{AppState, AppStateInner};
use lantern_api::{comments, posts, votes};
use lantern_db::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lantern=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret =
        std::env::var("LANTERN_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
    let mongo_url =
        std::env::var("LANTERN_MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let db_name = std::env::var("LANTERN_DB_NAME").unwrap_or_else(|_| "lantern".into());
    let host = std::env::var("LANTERN_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("LANTERN_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init document store
    let store = Store::connect(&mongo_url, &db_name).await?;

    // Shared state
    let state: AppState = Arc::new(AppStateInner { store, jwt_secret });

    // Routes
    let public_routes = Router::new()
        .route("/api/blog/posts/new", get(posts::list_new))
        .route("/api/blog/posts/{id}", get(posts::get_post));

    let protected_routes = Router::new()
        .route("/api/blog/posts", post(posts::create_post))
        .route("/api/blog/posts/{id}/comments", post(comments::add_comment))
        .route("/api/blog/posts/{id}/upvote", post(votes::upvote_post))
        .route("/api/blog/posts/{id}/downvote", post(votes::downvote_post))
        .route(
            "/api/blog/posts/{id}/comments/{comment_id}/upvote",
            post(votes::upvote_comment),
        )
        .route(
            "/api/blog/posts/{id}/comments/{comment_id}/downvote",
            post(votes::downvote_comment),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Lantern server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
