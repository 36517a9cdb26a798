use serde::{Deserialize, Serialize};

use super::{Method, ProviderAdapter, UpstreamRequest};
use crate::entities::{Calculate, EtaResult, Point, Provider};
use crate::error::{malformed_response_error, Error};

/// Service A takes a JSON body over POST.
#[derive(Clone, Debug)]
pub struct ServiceA {
    url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct Spot {
    #[serde(rename = "Lat", alias = "lat")]
    lat: f64,
    #[serde(rename = "Lng", alias = "lng")]
    lng: f64,
}

impl From<Point> for Spot {
    fn from(point: Point) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
        }
    }
}

#[derive(Debug, Serialize)]
struct ServiceARequest {
    #[serde(rename = "Origin")]
    origin: Spot,
    #[serde(rename = "Destination")]
    destination: Spot,
}

#[derive(Debug, Deserialize)]
struct ServiceAResponse {
    #[serde(rename = "Origin", alias = "origin", default)]
    origin: Option<Spot>,
    #[serde(rename = "Destination", alias = "destination", default)]
    destination: Option<Spot>,
    #[serde(rename = "Distance", alias = "distance", default)]
    distance: Option<i64>,
    #[serde(rename = "Duration", alias = "duration")]
    duration: u32,
}

impl ServiceA {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ProviderAdapter for ServiceA {
    fn provider(&self) -> Provider {
        Provider::ServiceA
    }

    fn build_request(&self, calculate: &Calculate) -> Result<UpstreamRequest, Error> {
        let request = ServiceARequest {
            origin: calculate.origin.into(),
            destination: calculate.destination.into(),
        };

        let body = serde_json::to_vec(&request).map_err(|err| Error::Encode {
            provider: Provider::ServiceA,
            message: err.to_string(),
        })?;

        Ok(UpstreamRequest {
            method: Method::Post,
            url: self.url.clone(),
            body: Some(body),
        })
    }

    fn parse_response(&self, body: &[u8]) -> Result<EtaResult, Error> {
        let response: ServiceAResponse = serde_json::from_slice(body)
            .map_err(|err| malformed_response_error(Provider::ServiceA, err))?;

        tracing::debug!(
            origin = ?response.origin,
            destination = ?response.destination,
            distance = ?response.distance,
            "service A route"
        );

        Ok(EtaResult::new(response.duration, Provider::ServiceA))
    }

    fn describe(&self) -> String {
        format!("Service A: [{}:{}]", Method::Post, self.url)
    }
}
