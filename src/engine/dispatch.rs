//! Fan-out of one request over the selected providers.
//!
//! A single adapter is called inline. Several adapters each run as their own
//! task and report into a channel with room for every outcome, so no task
//! ever waits on the coordinator. The first success wins; whatever is still
//! in flight at that point is aborted.

use std::sync::Arc;
use tokio::task::JoinHandle;

use super::Engine;
use crate::entities::{Calculate, EtaResult, Provider};
use crate::error::Error;
use crate::external::{ProviderAdapter, Transport};

type Outcome = Result<EtaResult, Error>;

impl Engine {
    /// Adapters to query for `provider`.
    pub fn select(&self, provider: &Provider) -> Result<Vec<Arc<dyn ProviderAdapter>>, Error> {
        match provider {
            Provider::ServiceA => Ok(vec![self.service_a.clone()]),
            Provider::ServiceB => Ok(vec![self.service_b.clone()]),
            Provider::Unspecified => Ok(vec![self.service_a.clone(), self.service_b.clone()]),
            Provider::Unknown(token) => Err(Error::UnknownProvider(token.clone())),
        }
    }

    #[tracing::instrument(skip_all, fields(provider = %calculate.provider))]
    pub async fn dispatch(&self, calculate: Calculate) -> Outcome {
        let adapters = self.select(&calculate.provider)?;

        for adapter in &adapters {
            tracing::debug!(adapter = %adapter.describe(), "selected");
        }

        if let [adapter] = adapters.as_slice() {
            return call(self.transport.as_ref(), adapter.as_ref(), &calculate).await;
        }

        race(self.transport.clone(), adapters, Arc::new(calculate)).await
    }
}

/// One full round trip: build, send, parse.
#[tracing::instrument(skip_all, fields(provider = %adapter.provider()))]
async fn call(
    transport: &dyn Transport,
    adapter: &dyn ProviderAdapter,
    calculate: &Calculate,
) -> Outcome {
    let request = adapter.build_request(calculate)?;
    let body = transport.execute(&adapter.provider(), request).await?;
    let result = adapter.parse_response(&body)?;

    tracing::info!(eta = result.eta, "provider answered");

    Ok(result)
}

async fn race(
    transport: Arc<dyn Transport>,
    adapters: Vec<Arc<dyn ProviderAdapter>>,
    calculate: Arc<Calculate>,
) -> Outcome {
    let (tx, rx) = async_channel::bounded(adapters.len().max(1));
    let mut in_flight = InFlight::default();

    for adapter in adapters {
        let tx = tx.clone();
        let transport = transport.clone();
        let calculate = calculate.clone();
        let provider = adapter.provider();

        let handle = tokio::spawn(async move {
            let outcome = call(transport.as_ref(), adapter.as_ref(), &calculate).await;
            // the coordinator is gone once a winner was picked
            let _ = tx.try_send(outcome);
        });

        in_flight.units.push((provider, handle));
    }
    drop(tx);

    let mut last_error = None;

    while let Ok(outcome) = rx.recv().await {
        match outcome {
            Ok(result) => {
                tracing::info!(winner = %result.provider, eta = result.eta, "first answer wins");
                return Ok(result);
            }
            Err(err) => {
                tracing::warn!(error = %err, "provider call failed");
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| Error::Transport {
        provider: Provider::Unspecified,
        message: "every provider call ended without an answer".into(),
    }))
}

/// Aborts unfinished units on drop, whether a winner was picked or the
/// dispatch itself was abandoned.
#[derive(Default)]
struct InFlight {
    units: Vec<(Provider, JoinHandle<()>)>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        for (provider, handle) in &self.units {
            if !handle.is_finished() {
                tracing::debug!(%provider, "discarding in-flight call");
                handle.abort();
            }
        }
    }
}
