mod dispatch;
mod eta_api;

use std::sync::Arc;

use crate::{
    config::Config,
    error::Error,
    external::{HttpTransport, ProviderAdapter, ServiceA, ServiceB, Transport},
};

/// Holds the provider table and the shared transport. Both are built once
/// and only ever read afterwards.
pub struct Engine {
    transport: Arc<dyn Transport>,
    service_a: Arc<dyn ProviderAdapter>,
    service_b: Arc<dyn ProviderAdapter>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.upstream_timeout)?;

        let engine = Self::with_transport(
            Arc::new(transport),
            Arc::new(ServiceA::new(config.service_a_url.clone())),
            Arc::new(ServiceB::new(config.service_b_url.clone())),
        );

        tracing::info!(
            service_a = %engine.service_a.describe(),
            service_b = %engine.service_b.describe(),
            "providers configured"
        );

        Ok(engine)
    }

    pub fn with_transport(
        transport: Arc<dyn Transport>,
        service_a: Arc<dyn ProviderAdapter>,
        service_b: Arc<dyn ProviderAdapter>,
    ) -> Self {
        Self {
            transport,
            service_a,
            service_b,
        }
    }
}
