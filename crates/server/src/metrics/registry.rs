// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::{Mutex, Once};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metrics not initialized")]
    NotInitialized,

    #[error("Failed to create Prometheus registry: {0}")]
    Registry(#[source] prometheus::Error),

    #[error("Failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("Metrics output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);
    static ref INIT_ONCE: Once = Once::new();

    // Counter metrics - created without registering to default registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.1, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref TX_PIPELINE_OUTCOMES: CounterVec = CounterVec::new(
        Opts::new(
            "tx_pipeline_outcomes",
            "Transaction requests by the stage that ended them"
        ),
        &["outcome"]
    )
    .expect("Failed to create tx_pipeline_outcomes counter");
}

/// Where a transaction request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxOutcome {
    ParamInvalid,
    DecodeFailed,
    ValidationFailed,
    MsgInvalid,
    SignFailed,
    BroadcastFailed,
    MarshalFailed,
    BroadcastOk,
}

impl TxOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxOutcome::ParamInvalid => "param_invalid",
            TxOutcome::DecodeFailed => "decode_failed",
            TxOutcome::ValidationFailed => "validation_failed",
            TxOutcome::MsgInvalid => "msg_invalid",
            TxOutcome::SignFailed => "sign_failed",
            TxOutcome::BroadcastFailed => "broadcast_failed",
            TxOutcome::MarshalFailed => "marshal_failed",
            TxOutcome::BroadcastOk => "broadcast_ok",
        }
    }

    /// Pipeline stage the outcome was decided at, used as the `stage` log field.
    pub fn stage(&self) -> &'static str {
        match self {
            TxOutcome::ParamInvalid => "param",
            TxOutcome::DecodeFailed => "decode",
            TxOutcome::ValidationFailed => "validate",
            TxOutcome::MsgInvalid => "validate_basic",
            TxOutcome::SignFailed => "sign",
            TxOutcome::BroadcastFailed | TxOutcome::BroadcastOk => "broadcast",
            TxOutcome::MarshalFailed => "marshal",
        }
    }
}

pub fn record_tx_outcome(outcome: TxOutcome) {
    TX_PIPELINE_OUTCOMES
        .with_label_values(&[outcome.as_str()])
        .inc();
}

/// Register all metrics with a registry using `prefix`. Only the first call has an effect.
pub fn init(prefix: &str) -> Result<(), MetricsError> {
    let mut result = Ok(());

    INIT_ONCE.call_once(|| {
        result = build_registry(prefix).map(|registry| {
            if let Ok(mut slot) = REGISTRY.lock() {
                *slot = Some(registry);
            }
        });
    });

    result
}

fn build_registry(prefix: &str) -> Result<Registry, MetricsError> {
    let registry =
        Registry::new_custom(Some(prefix.to_string()), None).map_err(MetricsError::Registry)?;

    registry
        .register(Box::new(HTTP_REQUESTS.clone()))
        .map_err(MetricsError::Registry)?;
    registry
        .register(Box::new(HTTP_REQUEST_SUCCESS.clone()))
        .map_err(MetricsError::Registry)?;
    registry
        .register(Box::new(HTTP_REQUEST_ERROR.clone()))
        .map_err(MetricsError::Registry)?;
    registry
        .register(Box::new(REQUEST_DURATION_SECONDS.clone()))
        .map_err(MetricsError::Registry)?;
    registry
        .register(Box::new(TX_PIPELINE_OUTCOMES.clone()))
        .map_err(MetricsError::Registry)?;

    Ok(registry)
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, MetricsError> {
    let families = {
        let guard = REGISTRY.lock().map_err(|_| MetricsError::NotInitialized)?;
        guard
            .as_ref()
            .ok_or(MetricsError::NotInitialized)?
            .gather()
    };

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
