use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use super::{Method, UpstreamRequest};
use crate::entities::Provider;
use crate::error::{transport_error, Error};

pub const DEFAULT_USER_AGENT: &str = "eta-gateway/0.1";

/// Performs one HTTP exchange and hands back the raw response body.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, provider: &Provider, request: UpstreamRequest)
        -> Result<Vec<u8>, Error>;
}

/// `reqwest` backed transport. The inner client is a connection pool, so one
/// instance serves every provider.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {}", err)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn execute(
        &self,
        provider: &Provider,
        request: UpstreamRequest,
    ) -> Result<Vec<u8>, Error> {
        tracing::info!("performing upstream call");

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self
                .client
                .post(&request.url)
                .header(CONTENT_TYPE, "application/json; charset=utf-8"),
        };

        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let res = builder
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| transport_error(provider.clone(), err))?;

        let body = res
            .bytes()
            .await
            .map_err(|err| transport_error(provider.clone(), err))?;

        Ok(body.to_vec())
    }
}
