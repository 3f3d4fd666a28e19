// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transaction intake pipeline: decode, validate, build and sign, broadcast, marshal.
//!
//! Handlers chain the stages with `?` and convert the first failure into exactly one
//! response through [`TxRequestError`].

mod base_req;
mod context;
mod decode;
mod submit;

pub use base_req::{BaseRequest, ValidationError};
pub use context::{
    BroadcastError, Broadcaster, SignError, SubmissionResult, TxContext, TxSigner,
};
pub use decode::{DecodeError, decode_request};
pub use submit::{SubmitError, submit};

use thiserror::Error;

use crate::handlers::common::{ParamParseError, impl_error_response};
use crate::metrics::{self, TxOutcome};
use crate::types::MsgError;

/// First failure of a transaction request, whichever stage raised it.
#[derive(Debug, Error)]
pub enum TxRequestError {
    #[error(transparent)]
    Param(#[from] ParamParseError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidMsg(#[from] MsgError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl_error_response!(TxRequestError, inspect = TxRequestError::record,
    TxRequestError::Param(_) | TxRequestError::Decode(_) => BAD_REQUEST,
    TxRequestError::Validation(_) => UNAUTHORIZED,
    TxRequestError::InvalidMsg(_) => BAD_REQUEST,
    TxRequestError::Submit(SubmitError::Sign(_)) => UNAUTHORIZED,
    TxRequestError::Submit(_) => INTERNAL_SERVER_ERROR,
);

impl TxRequestError {
    fn outcome(&self) -> TxOutcome {
        match self {
            TxRequestError::Param(_) => TxOutcome::ParamInvalid,
            TxRequestError::Decode(_) => TxOutcome::DecodeFailed,
            TxRequestError::Validation(_) => TxOutcome::ValidationFailed,
            TxRequestError::InvalidMsg(_) => TxOutcome::MsgInvalid,
            TxRequestError::Submit(err) => err.outcome(),
        }
    }

    fn record(&self) {
        let outcome = self.outcome();
        metrics::record_tx_outcome(outcome);
        tracing::debug!(stage = outcome.stage(), error = %self, "transaction request rejected");
    }
}
