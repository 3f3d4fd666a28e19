// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test doubles for the signing and broadcast seams.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::codec::{Codec, CodecError, JsonCodec};
use crate::handlers::tx::{
    BaseRequest, BroadcastError, Broadcaster, SignError, SubmissionResult, TxContext, TxSigner,
};
use crate::types::{Msg, MsgError};

pub fn base_request() -> BaseRequest {
    BaseRequest {
        name: "alice".to_string(),
        password: "pw".to_string(),
        chain_id: "test".to_string(),
        account_number: 1,
        sequence: 0,
        gas: 20000,
    }
}

pub struct TestMsg;

impl Msg for TestMsg {
    fn route(&self) -> &'static str {
        "test"
    }

    fn msg_type(&self) -> &'static str {
        "test_msg"
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "test": true })
    }
}

/// What the signer was asked to do.
#[derive(Debug, Clone)]
pub struct SignCall {
    pub name: String,
    pub password: String,
    pub chain_id: String,
    pub account_number: i64,
    pub sequence: i64,
    pub gas: i64,
    pub msg_types: Vec<&'static str>,
}

pub struct RecordingSigner {
    outcome: Result<Vec<u8>, String>,
    calls: AtomicUsize,
    last_call: Mutex<Option<SignCall>>,
}

impl RecordingSigner {
    pub fn ok(tx_bytes: Vec<u8>) -> Self {
        Self::with_outcome(Ok(tx_bytes))
    }

    pub fn err(message: &str) -> Self {
        Self::with_outcome(Err(message.to_string()))
    }

    fn with_outcome(outcome: Result<Vec<u8>, String>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<SignCall> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl<C: Codec> TxSigner<C> for RecordingSigner {
    async fn build_and_sign(
        &self,
        ctx: &TxContext<C>,
        name: &str,
        password: &str,
        msgs: &[&dyn Msg],
    ) -> Result<Vec<u8>, SignError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some(SignCall {
            name: name.to_string(),
            password: password.to_string(),
            chain_id: ctx.chain_id.clone(),
            account_number: ctx.account_number,
            sequence: ctx.sequence,
            gas: ctx.gas,
            msg_types: msgs.iter().map(|msg| msg.msg_type()).collect(),
        });
        self.outcome.clone().map_err(SignError::new)
    }
}

pub struct RecordingBroadcaster {
    outcome: Result<serde_json::Value, String>,
    received: Mutex<Vec<Vec<u8>>>,
}

impl RecordingBroadcaster {
    pub fn ok(result: serde_json::Value) -> Self {
        Self::with_outcome(Ok(result))
    }

    pub fn err(message: &str) -> Self {
        Self::with_outcome(Err(message.to_string()))
    }

    fn with_outcome(outcome: Result<serde_json::Value, String>) -> Self {
        Self {
            outcome,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Broadcaster for RecordingBroadcaster {
    async fn broadcast_tx(&self, tx_bytes: Vec<u8>) -> Result<SubmissionResult, BroadcastError> {
        self.received.lock().unwrap().push(tx_bytes);
        self.outcome
            .clone()
            .map(SubmissionResult)
            .map_err(BroadcastError::new)
    }
}

/// Decodes like [`JsonCodec`] but refuses to marshal anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingMarshalCodec;

impl Codec for FailingMarshalCodec {
    fn unmarshal_json<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        JsonCodec.unmarshal_json(bytes)
    }

    fn marshal_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        JsonCodec.marshal_json(value)
    }

    fn marshal_json_indent<T: Serialize + ?Sized>(
        &self,
        _value: &T,
    ) -> Result<Vec<u8>, CodecError> {
        Err(CodecError::new("marshal refused"))
    }
}
