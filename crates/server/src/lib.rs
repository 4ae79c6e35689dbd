use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod storage;

use storage::{CutStore, InMemoryStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CutStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CutStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/poly-cut", get(routes::list_cuts).post(routes::create_cut))
        .route(
            "/api/poly-cut/{id}",
            get(routes::get_cut)
                .put(routes::replace_cut)
                .delete(routes::delete_cut),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
