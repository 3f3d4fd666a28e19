// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON codec shared by request decoding, sign-doc encoding and response marshaling.
//!
//! The codec is passed explicitly to every stage that needs it. [`JsonCodec`] is the
//! default, backed by `serde_json`.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Failure to encode or decode a value. Displays the underlying serializer message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CodecError {
    message: String,
}

impl CodecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

pub trait Codec: Clone + Send + Sync + 'static {
    fn unmarshal_json<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;

    fn marshal_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    fn marshal_json_indent<T: Serialize + ?Sized>(&self, value: &T)
    -> Result<Vec<u8>, CodecError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn unmarshal_json<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn marshal_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn marshal_json_indent<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec_pretty(value)?)
    }
}
