//! Upstream ETA services.
//!
//! Each provider is a flat [`ProviderAdapter`]: it knows how to turn a
//! [`Calculate`] into an [`UpstreamRequest`] and how to turn the raw bytes of
//! the answer into an [`EtaResult`]. Adapters hold no connections; the actual
//! HTTP exchange goes through a shared [`Transport`].

mod service_a;
mod service_b;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

use std::fmt;

use crate::entities::{Calculate, EtaResult, Provider};
use crate::error::Error;

pub use service_a::ServiceA;
pub use service_b::ServiceB;
pub use transport::{HttpTransport, Transport};

pub const SERVICE_A_URL: &str = "http://localhost:8001/eta/calculate";
pub const SERVICE_B_URL: &str = "http://localhost:8002/calculateETA";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A fully built outbound call.
#[derive(Clone, Debug, PartialEq)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

pub trait ProviderAdapter: Send + Sync + fmt::Debug {
    fn provider(&self) -> Provider;

    fn build_request(&self, calculate: &Calculate) -> Result<UpstreamRequest, Error>;

    fn parse_response(&self, body: &[u8]) -> Result<EtaResult, Error>;

    /// Method and URL, for logs only.
    fn describe(&self) -> String;
}
