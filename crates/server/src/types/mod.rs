// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ledger message capability and the value types messages carry.

pub mod gov;

pub use gov::{MsgDeposit, MsgSubmitProposal, MsgVote, ProposalType, VoteOption};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stateless check failures raised by [`Msg::validate_basic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MsgError {
    #[error("{0} cannot be blank")]
    Blank(&'static str),

    #[error("Unknown proposal {0}")]
    UnknownProposal(i64),

    #[error("invalid coins: {0}")]
    InvalidCoins(String),
}

/// A message that can be wrapped into a transaction.
///
/// The submission pipeline only ever sees `&dyn Msg`; concrete message kinds live in
/// submodules and are built by their handlers.
pub trait Msg: Send + Sync {
    /// Module the message is routed to on the ledger.
    fn route(&self) -> &'static str;

    fn msg_type(&self) -> &'static str;

    /// Checks that need no ledger state.
    fn validate_basic(&self) -> Result<(), MsgError>;

    /// JSON form embedded into the sign document.
    fn to_json(&self) -> serde_json::Value;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: i64,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: i64) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Denominations are 3 to 16 lowercase alphanumerics starting with a letter.
    fn is_valid_denom(denom: &str) -> bool {
        let len = denom.len();
        (3..=16).contains(&len)
            && denom.starts_with(|c: char| c.is_ascii_lowercase())
            && denom
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }

    pub fn validate(&self) -> Result<(), MsgError> {
        if !Self::is_valid_denom(&self.denom) {
            return Err(MsgError::InvalidCoins(format!(
                "invalid denom '{}'",
                self.denom
            )));
        }
        if self.amount <= 0 {
            return Err(MsgError::InvalidCoins(format!(
                "{}{} is not positive",
                self.amount, self.denom
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_coins(coins: &[Coin]) -> Result<(), MsgError> {
    coins.iter().try_for_each(Coin::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coin() {
        assert!(Coin::new("stake", 10).validate().is_ok());
        assert!(Coin::new("atom2", 1).validate().is_ok());
    }

    #[test]
    fn rejects_bad_denoms() {
        for denom in ["ab", "Stake", "1atom", "a-b-c", "averyveryverylongdenom"] {
            assert!(
                Coin::new(denom, 1).validate().is_err(),
                "denom {denom} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let err = Coin::new("stake", 0).validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid coins: 0stake is not positive");
        assert!(Coin::new("stake", -5).validate().is_err());
    }

    #[test]
    fn validate_coins_stops_at_first_bad_coin() {
        let coins = vec![Coin::new("stake", 1), Coin::new("X", 1), Coin::new("atom", 0)];
        assert_eq!(
            validate_coins(&coins),
            Err(MsgError::InvalidCoins("invalid denom 'X'".to_string()))
        );
    }
}
