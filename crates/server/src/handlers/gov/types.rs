// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

use crate::handlers::tx::BaseRequest;
use crate::types::{Coin, ProposalType, VoteOption};

/// Body of `POST /gov/proposals`.
#[derive(Debug, Deserialize)]
pub struct PostProposalRequest {
    #[serde(flatten)]
    pub base_req: BaseRequest,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub proposal_type: ProposalType,
    #[serde(default)]
    pub proposer: String,
    #[serde(default)]
    pub initial_deposit: Vec<Coin>,
}

/// Body of `POST /gov/proposals/{proposalId}/deposits`.
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    #[serde(flatten)]
    pub base_req: BaseRequest,
    #[serde(default)]
    pub depositor: String,
    #[serde(default)]
    pub amount: Vec<Coin>,
}

/// Body of `POST /gov/proposals/{proposalId}/votes`.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    #[serde(flatten)]
    pub base_req: BaseRequest,
    #[serde(default)]
    pub voter: String,
    pub option: VoteOption,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_fields_sit_beside_message_fields() {
        let req: VoteRequest = serde_json::from_str(
            r#"{"name":"alice","password":"pw","chain_id":"test","account_number":1,"sequence":4,"gas":200,"voter":"cosmos1voter","option":"Abstain"}"#,
        )
        .unwrap();
        assert_eq!(req.base_req.name, "alice");
        assert_eq!(req.base_req.sequence, 4);
        assert_eq!(req.voter, "cosmos1voter");
        assert_eq!(req.option, VoteOption::Abstain);
    }

    #[test]
    fn missing_base_fields_are_left_for_validation() {
        let req: DepositRequest = serde_json::from_str(
            r#"{"depositor":"cosmos1dep","amount":[{"denom":"stake","amount":5}]}"#,
        )
        .unwrap();
        assert!(req.base_req.validate().is_err());
        assert_eq!(req.amount, vec![Coin::new("stake", 5)]);
    }

    #[test]
    fn unknown_proposal_type_is_a_decode_error() {
        let result = serde_json::from_str::<PostProposalRequest>(
            r#"{"title":"t","description":"d","proposal_type":"Coup","proposer":"p"}"#,
        );
        assert!(result.is_err());
    }
}
