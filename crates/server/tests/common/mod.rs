// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use ledger_tx_rest::app::create_app;
use ledger_tx_rest::handlers::tx::{
    BroadcastError, Broadcaster, SignError, SubmissionResult, TxContext, TxSigner,
};
use ledger_tx_rest::state::AppState;
use ledger_tx_rest::types::Msg;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const VALID_BASE: &str =
    r#""name":"alice","password":"pw","chain_id":"test","account_number":1,"sequence":0,"gas":20000"#;

pub struct StubSigner {
    outcome: Result<Vec<u8>, String>,
    calls: AtomicUsize,
    msg_types: Mutex<Vec<&'static str>>,
}

impl StubSigner {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(b"signed-tx".to_vec()),
            calls: AtomicUsize::new(0),
            msg_types: Mutex::new(Vec::new()),
        })
    }

    pub fn err(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            msg_types: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn msg_types(&self) -> Vec<&'static str> {
        self.msg_types.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxSigner for StubSigner {
    async fn build_and_sign(
        &self,
        _ctx: &TxContext,
        _name: &str,
        _password: &str,
        msgs: &[&dyn Msg],
    ) -> Result<Vec<u8>, SignError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.msg_types
            .lock()
            .unwrap()
            .extend(msgs.iter().map(|msg| msg.msg_type()));
        self.outcome.clone().map_err(SignError::new)
    }
}

/// Replies with queued outcomes in order, repeating the last one once the queue drains.
pub struct StubBroadcaster {
    outcomes: Mutex<VecDeque<Result<serde_json::Value, String>>>,
    calls: AtomicUsize,
}

impl StubBroadcaster {
    pub fn sequence(outcomes: Vec<Result<serde_json::Value, String>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn ok(result: serde_json::Value) -> Arc<Self> {
        Self::sequence(vec![Ok(result)])
    }

    pub fn err(message: &str) -> Arc<Self> {
        Self::sequence(vec![Err(message.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Broadcaster for StubBroadcaster {
    async fn broadcast_tx(&self, _tx_bytes: Vec<u8>) -> Result<SubmissionResult, BroadcastError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut outcomes = self.outcomes.lock().unwrap();
        let outcome = if outcomes.len() > 1 {
            outcomes.pop_front().unwrap()
        } else {
            outcomes.front().cloned().unwrap()
        };
        outcome.map(SubmissionResult).map_err(BroadcastError::new)
    }
}

pub fn test_app(
    config: config::GatewayConfig,
    signer: Arc<StubSigner>,
    broadcaster: Arc<StubBroadcaster>,
) -> Router {
    create_app(AppState::new(config, signer, broadcaster))
}

pub async fn send(app: Router, method: &str, uri: &str, body: String) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send_request(app, request).await
}

/// Like [`post`], but declares the body size up front with `content-length`.
pub async fn post_sized(app: Router, uri: &str, body: String) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .unwrap();
    send_request(app, request).await
}

pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).to_string())
}

pub async fn post(app: Router, uri: &str, body: String) -> (StatusCode, String) {
    send(app, "POST", uri, body).await
}
