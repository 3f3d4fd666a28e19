// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Governance messages: proposal submission, deposits and votes.

use super::{Coin, Msg, MsgError, validate_coins};
use serde::{Deserialize, Serialize};
use serde_json::json;

const ROUTE: &str = "gov";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalType {
    Text,
    ParameterChange,
    SoftwareUpgrade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    Abstain,
    No,
    NoWithVeto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgSubmitProposal {
    pub title: String,
    pub description: String,
    pub proposal_type: ProposalType,
    pub proposer: String,
    pub initial_deposit: Vec<Coin>,
}

impl Msg for MsgSubmitProposal {
    fn route(&self) -> &'static str {
        ROUTE
    }

    fn msg_type(&self) -> &'static str {
        "submit_proposal"
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.title.trim().is_empty() {
            return Err(MsgError::Blank("proposal title"));
        }
        if self.description.trim().is_empty() {
            return Err(MsgError::Blank("proposal description"));
        }
        if self.proposer.is_empty() {
            return Err(MsgError::Blank("proposer address"));
        }
        validate_coins(&self.initial_deposit)
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "title": self.title,
            "description": self.description,
            "proposal_type": self.proposal_type,
            "proposer": self.proposer,
            "initial_deposit": self.initial_deposit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgDeposit {
    pub proposal_id: i64,
    pub depositor: String,
    pub amount: Vec<Coin>,
}

impl Msg for MsgDeposit {
    fn route(&self) -> &'static str {
        ROUTE
    }

    fn msg_type(&self) -> &'static str {
        "deposit"
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.proposal_id < 0 {
            return Err(MsgError::UnknownProposal(self.proposal_id));
        }
        if self.depositor.is_empty() {
            return Err(MsgError::Blank("depositor address"));
        }
        if self.amount.is_empty() {
            return Err(MsgError::InvalidCoins("deposit amount is empty".to_string()));
        }
        validate_coins(&self.amount)
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "proposal_id": self.proposal_id,
            "depositor": self.depositor,
            "amount": self.amount,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgVote {
    pub proposal_id: i64,
    pub voter: String,
    pub option: VoteOption,
}

impl Msg for MsgVote {
    fn route(&self) -> &'static str {
        ROUTE
    }

    fn msg_type(&self) -> &'static str {
        "vote"
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.proposal_id < 0 {
            return Err(MsgError::UnknownProposal(self.proposal_id));
        }
        if self.voter.is_empty() {
            return Err(MsgError::Blank("voter address"));
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "proposal_id": self.proposal_id,
            "voter": self.voter,
            "option": self.option,
        })
    }
}
