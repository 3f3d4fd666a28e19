// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::codec::{Codec, CodecError};

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The transport could not deliver the body.
    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Malformed(#[from] CodecError),
}

impl From<BytesRejection> for DecodeError {
    fn from(rejection: BytesRejection) -> Self {
        DecodeError::Read(rejection.body_text())
    }
}

/// Decodes a request body into `T` with the given codec.
///
/// Body size is bounded by the router's body limit layer, nothing more is imposed here.
pub fn decode_request<T, C>(
    codec: &C,
    body: Result<Bytes, BytesRejection>,
) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
    C: Codec,
{
    let body = body?;
    Ok(codec.unmarshal_json(&body)?)
}
