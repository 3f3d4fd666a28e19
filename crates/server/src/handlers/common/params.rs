// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Numeric path/query parameter parsing.
//!
//! A parse failure is returned as [`ParamParseError`], which renders as a 400 response
//! with the offending value quoted. Handlers propagate it with `?` and stop.

use thiserror::Error;

use super::impl_error_response;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamParseError {
    #[error("'{0}' is not a valid int64")]
    Int64(String),

    #[error("'{0}' is not a valid uint64")]
    Uint64(String),

    #[error("'{0}' is not a valid float64")]
    Float64(String),
}

impl_error_response!(ParamParseError, _ => BAD_REQUEST);

pub fn parse_int64(s: &str) -> Result<i64, ParamParseError> {
    s.parse::<i64>()
        .map_err(|_| ParamParseError::Int64(s.to_string()))
}

pub fn parse_uint64(s: &str) -> Result<u64, ParamParseError> {
    s.parse::<u64>()
        .map_err(|_| ParamParseError::Uint64(s.to_string()))
}

pub fn parse_float64(s: &str) -> Result<f64, ParamParseError> {
    s.parse::<f64>()
        .map_err(|_| ParamParseError::Float64(s.to_string()))
}
