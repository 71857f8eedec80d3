use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/:id", get(handlers::get_article))
        .route("/api/articles/:id/insights", get(handlers::get_insights))
        .route("/api/articles/:id/poll", get(handlers::get_poll).post(handlers::vote_poll))
        .route("/api/articles/:id/quiz", get(handlers::get_quiz))
        .route("/api/articles/:id/podcast", get(handlers::get_podcast))
        .route("/api/trending", get(handlers::trending))
        .route("/api/categories", get(handlers::categories))
        .route("/api/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves the API on `bind` until Ctrl-C.
pub async fn serve(state: AppState, bind: &str) -> nd_core::Result<()> {
    let articles = state.catalog.len();
    let listener = TcpListener::bind(bind).await?;
    info!("🌐 Serving {} articles on http://{}", articles, listener.local_addr()?);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler: run until the process is killed
        std::future::pending::<()>().await;
    }
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use nd_core::{Article, Error, Result};
}
