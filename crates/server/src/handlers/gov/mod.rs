// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Governance transaction handlers.
//!
//! Each endpoint builds one governance message from the request body and hands it to the
//! transaction pipeline.

mod post_deposit;
mod post_proposal;
mod post_vote;
mod types;

pub use post_deposit::post_deposit;
pub use post_proposal::post_proposal;
pub use post_vote::post_vote;
pub use types::{DepositRequest, PostProposalRequest, VoteRequest};
