// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Signing metadata every transaction request carries.
///
/// Missing JSON fields take their zero value so that absence is reported by
/// [`BaseRequest::validate`] rather than by the decoder.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaseRequest {
    pub name: String,
    pub password: String,
    pub chain_id: String,
    pub account_number: i64,
    pub sequence: i64,
    pub gas: i64,
}

impl fmt::Debug for BaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseRequest")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("chain_id", &self.chain_id)
            .field("account_number", &self.account_number)
            .field("sequence", &self.sequence)
            .field("gas", &self.gas)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name required but not specified")]
    Name,

    #[error("Password required but not specified")]
    Password,

    #[error("ChainID required but not specified")]
    ChainId,

    #[error("Account Number required but not specified")]
    AccountNumber,

    #[error("Sequence required but not specified")]
    Sequence,
}

impl ValidationError {
    /// JSON name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Name => "name",
            ValidationError::Password => "password",
            ValidationError::ChainId => "chain_id",
            ValidationError::AccountNumber => "account_number",
            ValidationError::Sequence => "sequence",
        }
    }
}

impl BaseRequest {
    /// Checks required fields in a fixed order and reports only the first violation.
    /// `gas` is left to the signer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Name);
        }
        if self.password.is_empty() {
            return Err(ValidationError::Password);
        }
        if self.chain_id.is_empty() {
            return Err(ValidationError::ChainId);
        }
        if self.account_number < 0 {
            return Err(ValidationError::AccountNumber);
        }
        if self.sequence < 0 {
            return Err(ValidationError::Sequence);
        }
        Ok(())
    }
}
