use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Point, Provider};
use crate::error::Error;

/// An inbound ETA request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculate {
    #[serde(rename = "Origin", alias = "origin")]
    pub origin: Point,
    #[serde(rename = "Destination", alias = "destination")]
    pub destination: Point,
    #[serde(rename = "Provider", alias = "provider", default)]
    pub provider: Provider,
}

impl Calculate {
    pub fn new(origin: Point, destination: Point, provider: Provider) -> Self {
        Self {
            origin,
            destination,
            provider,
        }
    }

    /// Decodes a request body read in full by the HTTP boundary.
    pub fn from_slice(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|err| Error::MalformedRequest(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.origin.is_set() {
            return Err(Error::InvalidPoint("origin"));
        }

        if !self.destination.is_set() {
            return Err(Error::InvalidPoint("destination"));
        }

        if !self.provider.is_known() {
            return Err(Error::InvalidProvider(self.provider.to_string()));
        }

        Ok(())
    }
}

impl fmt::Display for Calculate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin: [{}] destination: [{}] provider: [{}]",
            self.origin, self.destination, self.provider
        )
    }
}
