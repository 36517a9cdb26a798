//! Deterministic [`Transport`] double for dispatcher tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use super::{Transport, UpstreamRequest};
use crate::entities::Provider;
use crate::error::Error;

pub const STUB_A_URL: &str = "http://service-a.test/eta/calculate";
pub const STUB_B_URL: &str = "http://service-b.test/calculateETA";

#[derive(Clone, Debug)]
enum StubOutcome {
    Body(Vec<u8>),
    Refused,
}

#[derive(Clone, Debug)]
struct StubRoute {
    url_prefix: String,
    delay: Duration,
    outcome: StubOutcome,
}

/// Answers by URL prefix after an optional delay. Records every call as it
/// starts and again once its delay has run out.
#[derive(Debug, Default)]
pub struct StubTransport {
    routes: Vec<StubRoute>,
    calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url_prefix: &str, delay: Duration, body: &str) -> Self {
        self.routes.push(StubRoute {
            url_prefix: url_prefix.to_string(),
            delay,
            outcome: StubOutcome::Body(body.as_bytes().to_vec()),
        });
        self
    }

    pub fn refuse(mut self, url_prefix: &str, delay: Duration) -> Self {
        self.routes.push(StubRoute {
            url_prefix: url_prefix.to_string(),
            delay,
            outcome: StubOutcome::Refused,
        });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, url_prefix: &str) -> bool {
        self.calls().iter().any(|url| url.starts_with(url_prefix))
    }

    pub fn was_completed(&self, url_prefix: &str) -> bool {
        self.completed
            .lock()
            .unwrap()
            .iter()
            .any(|url| url.starts_with(url_prefix))
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(
        &self,
        provider: &Provider,
        request: UpstreamRequest,
    ) -> Result<Vec<u8>, Error> {
        self.calls.lock().unwrap().push(request.url.clone());

        let route = self
            .routes
            .iter()
            .find(|route| request.url.starts_with(&route.url_prefix))
            .cloned();

        let route = match route {
            Some(route) => route,
            None => {
                return Err(Error::Transport {
                    provider: provider.clone(),
                    message: format!("no stub for {}", request.url),
                })
            }
        };

        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }

        self.completed.lock().unwrap().push(request.url.clone());

        match route.outcome {
            StubOutcome::Body(body) => Ok(body),
            StubOutcome::Refused => Err(Error::Transport {
                provider: provider.clone(),
                message: "connection refused".into(),
            }),
        }
    }
}
