use config::GatewayConfig;
use std::sync::Arc;

use crate::codec::JsonCodec;
use crate::handlers::tx::{Broadcaster, TxSigner};
use crate::routes::RouteRegistry;

/// Shared per-process handles. Nothing here is mutated by request handling.
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub codec: JsonCodec,
    pub signer: Arc<dyn TxSigner>,
    pub broadcaster: Arc<dyn Broadcaster>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    pub fn new(
        config: GatewayConfig,
        signer: Arc<dyn TxSigner>,
        broadcaster: Arc<dyn Broadcaster>,
    ) -> Self {
        Self {
            config,
            codec: JsonCodec,
            signer,
            broadcaster,
            route_registry: RouteRegistry::new(),
        }
    }
}
