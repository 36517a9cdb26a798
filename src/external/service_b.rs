use serde::Deserialize;

use super::{Method, ProviderAdapter, UpstreamRequest};
use crate::entities::{Calculate, EtaResult, Point, Provider};
use crate::error::{malformed_response_error, Error};

/// Service B takes the route as `lat|lng` query parameters over GET.
#[derive(Clone, Debug)]
pub struct ServiceB {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ServiceBResponse {
    #[serde(rename = "From", alias = "from", default)]
    from: Option<String>,
    #[serde(rename = "To", alias = "to", default)]
    to: Option<String>,
    #[serde(rename = "Distance", alias = "distance", default)]
    distance: Option<i64>,
    #[serde(rename = "Duration", alias = "duration")]
    duration: u32,
}

impl ServiceB {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    // `|` is left as is; coordinates never contain it. A base URL that
    // already carries a query keeps it.
    fn query_url(&self, origin: Point, destination: Point) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };

        format!(
            "{}{}from={}|{}&to={}|{}",
            self.url, separator, origin.lat, origin.lng, destination.lat, destination.lng
        )
    }
}

impl ProviderAdapter for ServiceB {
    fn provider(&self) -> Provider {
        Provider::ServiceB
    }

    fn build_request(&self, calculate: &Calculate) -> Result<UpstreamRequest, Error> {
        Ok(UpstreamRequest {
            method: Method::Get,
            url: self.query_url(calculate.origin, calculate.destination),
            body: None,
        })
    }

    fn parse_response(&self, body: &[u8]) -> Result<EtaResult, Error> {
        let response: ServiceBResponse = serde_json::from_slice(body)
            .map_err(|err| malformed_response_error(Provider::ServiceB, err))?;

        tracing::debug!(
            from = ?response.from,
            to = ?response.to,
            distance = ?response.distance,
            "service B route"
        );

        Ok(EtaResult::new(response.duration, Provider::ServiceB))
    }

    fn describe(&self) -> String {
        format!("Service B: [{}:{}]", Method::Get, self.url)
    }
}
