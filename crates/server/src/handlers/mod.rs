pub mod common;
pub mod gov;
pub mod metrics;
pub mod tx;
