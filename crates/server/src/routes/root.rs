//! Root endpoint handler.
//!
//! Returns service information and the list of registered routes.

use crate::state::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let routes = state.route_registry.routes();

    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "routes": routes
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(root_handler))
}
