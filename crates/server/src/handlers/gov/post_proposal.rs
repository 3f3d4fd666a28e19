// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::Response,
};

use super::PostProposalRequest;
use crate::handlers::common::write_success;
use crate::handlers::tx::{TxRequestError, decode_request, submit};
use crate::state::AppState;
use crate::types::{Msg, MsgSubmitProposal};

/// Handler for POST /gov/proposals
pub async fn post_proposal(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, TxRequestError> {
    let req: PostProposalRequest = decode_request(&state.codec, body)?;
    req.base_req.validate()?;

    let msg = MsgSubmitProposal {
        title: req.title,
        description: req.description,
        proposal_type: req.proposal_type,
        proposer: req.proposer,
        initial_deposit: req.initial_deposit,
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
