// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    response::Response,
};

use super::DepositRequest;
use crate::handlers::common::{parse_int64, write_success};
use crate::handlers::tx::{TxRequestError, decode_request, submit};
use crate::state::AppState;
use crate::types::{Msg, MsgDeposit};

/// Handler for POST /gov/proposals/{proposalId}/deposits
pub async fn post_deposit(
    State(state): State<AppState>,
    Path(proposal_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, TxRequestError> {
    let proposal_id = parse_int64(&proposal_id)?;
    let req: DepositRequest = decode_request(&state.codec, body)?;
    req.base_req.validate()?;

    let msg = MsgDeposit {
        proposal_id,
        depositor: req.depositor,
        amount: req.amount,
    };
    msg.validate_basic()?;

    let output = submit(
        &state.codec,
        state.signer.as_ref(),
        state.broadcaster.as_ref(),
        &req.base_req,
        &msg,
    )
    .await?;

    Ok(write_success(output))
}
