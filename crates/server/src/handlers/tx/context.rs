// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Seams to the signing and broadcast subsystems.
//!
//! Neither key management nor network submission happens in this crate. A host wires in
//! a [`TxSigner`] and a [`Broadcaster`]; the pipeline only drives them.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use super::BaseRequest;
use crate::codec::{Codec, CodecError, JsonCodec};
use crate::types::Msg;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct SignError {
    message: String,
}

impl SignError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<CodecError> for SignError {
    fn from(err: CodecError) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct BroadcastError {
    message: String,
}

impl BroadcastError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Whatever the broadcaster reports back. Passed through to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionResult(pub Value);

/// Account metadata a transaction is signed against.
#[derive(Debug, Clone)]
pub struct TxContext<C = JsonCodec> {
    pub codec: C,
    pub account_number: i64,
    pub sequence: i64,
    pub chain_id: String,
    pub gas: i64,
}

#[derive(Serialize)]
struct StdFee {
    gas: i64,
}

/// Canonical document a signature commits to. Keys at every depth are in alphabetical
/// order: struct fields are declared sorted and message bodies pass through [`sort_keys`].
#[derive(Serialize)]
struct StdSignDoc<'a> {
    account_number: i64,
    chain_id: &'a str,
    fee: StdFee,
    msgs: Vec<Value>,
    sequence: i64,
}

impl<C: Codec> TxContext<C> {
    pub fn from_base_request(codec: C, req: &BaseRequest) -> Self {
        Self {
            codec,
            account_number: req.account_number,
            sequence: req.sequence,
            chain_id: req.chain_id.clone(),
            gas: req.gas,
        }
    }

    /// Bytes a signer signs for `msgs` under this context.
    pub fn sign_bytes(&self, msgs: &[&dyn Msg]) -> Result<Vec<u8>, CodecError> {
        let doc = StdSignDoc {
            account_number: self.account_number,
            chain_id: &self.chain_id,
            fee: StdFee { gas: self.gas },
            msgs: msgs.iter().map(|msg| sort_keys(msg.to_json())).collect(),
            sequence: self.sequence,
        };
        self.codec.marshal_json(&doc)
    }

    pub async fn build_and_sign(
        &self,
        signer: &dyn TxSigner<C>,
        name: &str,
        password: &str,
        msgs: &[&dyn Msg],
    ) -> Result<Vec<u8>, SignError> {
        signer.build_and_sign(self, name, password, msgs).await
    }
}

/// Rebuilds every object in `value` with its keys sorted. Insertion order of the source
/// maps is ignored.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Builds a transaction from messages and signs it with the named key.
#[async_trait]
pub trait TxSigner<C: Codec = JsonCodec>: Send + Sync {
    async fn build_and_sign(
        &self,
        ctx: &TxContext<C>,
        name: &str,
        password: &str,
        msgs: &[&dyn Msg],
    ) -> Result<Vec<u8>, SignError>;
}

/// Submits signed transaction bytes to the ledger. One attempt per call.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    async fn broadcast_tx(&self, tx_bytes: Vec<u8>) -> Result<SubmissionResult, BroadcastError>;
}
