// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod codec;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod test_fixtures;
