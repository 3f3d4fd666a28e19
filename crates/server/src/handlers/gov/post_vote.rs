// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    response::Response,
};

use super::VoteRequest;
use crate::handlers::common::{parse_int64, write_success};
use crate::handlers::tx::{TxRequestError, decode_request, submit};
use crate::state::AppState;
use crate::types::{Msg, MsgVote};

/// Handler for POST /gov/proposals/{proposalId}/votes
pub async fn post_vote(
    State(state): State<AppState>,
    Path(proposal_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, TxRequestError> {
    let proposal_id = parse_int64(&proposal_id)?;
    let req: VoteRequest = decode_request(&state.codec, body)?;
    req.base_req.validate()?;

    let msg = MsgVote {
        proposal_id,
        voter: req.voter,
        option: req.option,
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
