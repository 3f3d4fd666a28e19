// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, extract::DefaultBodyLimit, middleware};
use thiserror::Error;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{logging, metrics, routes, state::AppState};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Assemble the router: transaction routes, route index, optional metrics, and the
/// logging, tracing and body-limit layers.
pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;
    let metrics_enabled = state.config.metrics.enabled;

    let mut router = Router::new().merge(routes::gov::routes(registry));

    if metrics_enabled {
        if let Err(err) = metrics::init(&state.config.metrics.prometheus_prefix) {
            tracing::error!(error = %err, "failed to initialize metrics registry");
        }
        router = router.merge(routes::metrics::routes(registry));
    }

    router = router.merge(routes::root::routes());

    if metrics_enabled {
        router = router.layer(middleware::from_fn(metrics::metrics_middleware));
    }

    router
        .layer(middleware::from_fn(logging::http_logger_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.config.express.request_limit))
        .with_state(state)
}

/// Bind to the configured host and port and serve until the listener fails.
pub async fn serve(state: AppState) -> Result<(), ServeError> {
    let addr = format!(
        "{}:{}",
        state.config.express.bind_host, state.config.express.port
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Log level: {}", state.config.log.level);

    axum::serve(listener, create_app(state))
        .await
        .map_err(ServeError::Serve)
}
