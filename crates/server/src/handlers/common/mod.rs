// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response emission and parameter parsing shared by every handler.

pub mod params;
pub mod response;

pub use params::{ParamParseError, parse_float64, parse_int64, parse_uint64};
pub(crate) use response::{ignore_error, impl_error_response};
pub use response::{write_error, write_success};
