// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// HTTP logger middleware: one event per request under target `http`.
///
/// - 2xx/3xx at DEBUG
/// - 4xx at WARN
/// - 5xx at ERROR
///
/// Log format: "METHOD /path STATUS DURATIONms", e.g. "POST /gov/proposals 200 45ms".
/// Request bodies are never logged; they carry credentials.
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let full_path = match req.uri().query() {
        Some(q) => format!("{}?{}", req.uri().path(), q),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status_code = response.status().as_u16();

    match status_code {
        200..=399 => tracing::debug!(
            target: "http",
            method = %method,
            path = %full_path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms",
            method, full_path, status_code, duration_ms
        ),
        400..=499 => tracing::warn!(
            target: "http",
            method = %method,
            path = %full_path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms",
            method, full_path, status_code, duration_ms
        ),
        _ => tracing::error!(
            target: "http",
            method = %method,
            path = %full_path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms",
            method, full_path, status_code, duration_ms
        ),
    }

    response
}
