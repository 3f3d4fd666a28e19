// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

use super::{BaseRequest, BroadcastError, Broadcaster, SignError, TxContext, TxSigner};
use crate::codec::{Codec, CodecError};
use crate::metrics::{self, TxOutcome};
use crate::types::Msg;

/// Errors that can occur after a request passed validation.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Sign(#[from] SignError),

    #[error("{0}")]
    Broadcast(#[from] BroadcastError),

    #[error("{0}")]
    Marshal(#[source] CodecError),
}

impl SubmitError {
    pub(crate) fn outcome(&self) -> TxOutcome {
        match self {
            SubmitError::Sign(_) => TxOutcome::SignFailed,
            SubmitError::Broadcast(_) => TxOutcome::BroadcastFailed,
            SubmitError::Marshal(_) => TxOutcome::MarshalFailed,
        }
    }
}

/// Signs `msg` under the metadata in `req`, broadcasts it, and returns the indented JSON
/// of the broadcast result.
///
/// `req` must already have passed [`BaseRequest::validate`]. Each step runs once and the
/// first failure ends the submission.
pub async fn submit<C: Codec>(
    codec: &C,
    signer: &dyn TxSigner<C>,
    broadcaster: &dyn Broadcaster,
    req: &BaseRequest,
    msg: &dyn Msg,
) -> Result<Vec<u8>, SubmitError> {
    let ctx = TxContext::from_base_request(codec.clone(), req);

    let tx_bytes = ctx
        .build_and_sign(signer, &req.name, &req.password, &[msg])
        .await
        .inspect_err(|err| {
            tracing::warn!(
                stage = TxOutcome::SignFailed.stage(),
                name = %req.name,
                chain_id = %req.chain_id,
                account_number = req.account_number,
                sequence = req.sequence,
                error = %err,
                "failed to build and sign transaction"
            );
        })?;

    tracing::debug!(
        msg_type = msg.msg_type(),
        route = msg.route(),
        tx_len = tx_bytes.len(),
        "transaction signed"
    );

    let result = broadcaster
        .broadcast_tx(tx_bytes)
        .await
        .inspect_err(|err| {
            tracing::error!(
                stage = TxOutcome::BroadcastFailed.stage(),
                chain_id = %req.chain_id,
                sequence = req.sequence,
                error = %err,
                "failed to broadcast transaction"
            );
        })?;

    let output = codec
        .marshal_json_indent(&result)
        .map_err(|err| {
            tracing::error!(
                stage = TxOutcome::MarshalFailed.stage(),
                error = %err,
                "failed to marshal broadcast result"
            );
            SubmitError::Marshal(err)
        })?;

    metrics::record_tx_outcome(TxOutcome::BroadcastOk);
    tracing::info!(
        stage = TxOutcome::BroadcastOk.stage(),
        name = %req.name,
        chain_id = %req.chain_id,
        sequence = req.sequence,
        "transaction broadcast"
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;
    use crate::test_fixtures::{
        FailingMarshalCodec, RecordingBroadcaster, RecordingSigner, TestMsg, base_request,
    };
    use serde_json::json;

    #[tokio::test]
    async fn success_returns_indented_result() {
        let signer = RecordingSigner::ok(b"signed".to_vec());
        let broadcaster = RecordingBroadcaster::ok(json!({ "hash": "AB12", "height": 5 }));

        let output = submit(&JsonCodec, &signer, &broadcaster, &base_request(), &TestMsg)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\n  \"hash\": \"AB12\",\n  \"height\": 5\n}"
        );
        assert_eq!(broadcaster.received(), vec![b"signed".to_vec()]);
    }

    #[tokio::test]
    async fn signer_sees_request_metadata() {
        let signer = RecordingSigner::ok(b"signed".to_vec());
        let broadcaster = RecordingBroadcaster::ok(json!({}));

        submit(&JsonCodec, &signer, &broadcaster, &base_request(), &TestMsg)
            .await
            .unwrap();

        let call = signer.last_call().unwrap();
        assert_eq!(call.name, "alice");
        assert_eq!(call.password, "pw");
        assert_eq!(call.chain_id, "test");
        assert_eq!(call.account_number, 1);
        assert_eq!(call.sequence, 0);
        assert_eq!(call.gas, 20000);
        assert_eq!(call.msg_types, vec!["test_msg"]);
    }

    #[tokio::test]
    async fn sign_failure_skips_broadcast() {
        let signer = RecordingSigner::err("Ciphertext decryption failed");
        let broadcaster = RecordingBroadcaster::ok(json!({}));

        let err = submit(&JsonCodec, &signer, &broadcaster, &base_request(), &TestMsg)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Sign(_)));
        assert_eq!(err.to_string(), "Ciphertext decryption failed");
        assert_eq!(broadcaster.calls(), 0);
    }

    #[tokio::test]
    async fn broadcast_failure_is_reported() {
        let signer = RecordingSigner::ok(b"signed".to_vec());
        let broadcaster = RecordingBroadcaster::err("connection refused");

        let err = submit(&JsonCodec, &signer, &broadcaster, &base_request(), &TestMsg)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Broadcast(_)));
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(signer.calls(), 1);
    }

    #[tokio::test]
    async fn marshal_failure_after_broadcast() {
        let codec = FailingMarshalCodec;
        let signer = RecordingSigner::ok(b"signed".to_vec());
        let broadcaster = RecordingBroadcaster::ok(json!({ "hash": "AB12" }));

        let err = submit(&codec, &signer, &broadcaster, &base_request(), &TestMsg)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Marshal(_)));
        assert_eq!(err.to_string(), "marshal refused");
        assert_eq!(broadcaster.calls(), 1);
    }

    #[tokio::test]
    async fn identical_submissions_are_both_forwarded() {
        let signer = RecordingSigner::ok(b"signed".to_vec());
        let broadcaster = RecordingBroadcaster::ok(json!({ "hash": "AB12" }));
        let req = base_request();

        let first = submit(&JsonCodec, &signer, &broadcaster, &req, &TestMsg).await;
        let second = submit(&JsonCodec, &signer, &broadcaster, &req, &TestMsg).await;

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(signer.calls(), 2);
        assert_eq!(broadcaster.calls(), 2);
    }
}
