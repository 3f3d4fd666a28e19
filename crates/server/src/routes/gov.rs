use axum::{Router, routing::post};

use crate::{
    handlers::gov,
    routes::{RegisterRoute, RouteRegistry},
    state::AppState,
};

/// Create governance transaction routes.
pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            "",
            "/gov/proposals",
            "post",
            post(gov::post_proposal),
        )
        .route_registered(
            registry,
            "",
            "/gov/proposals/:proposal_id/deposits",
            "post",
            post(gov::post_deposit),
        )
        .route_registered(
            registry,
            "",
            "/gov/proposals/:proposal_id/votes",
            "post",
            post(gov::post_vote),
        )
}
