use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Calculate, EtaResult};
use crate::error::Error;

#[async_trait]
pub trait EtaAPI {
    /// Validates `calculate` and answers with the first ETA a provider
    /// returns.
    async fn calculate(&self, calculate: Calculate) -> Result<EtaResult, Error>;
}

pub trait API: EtaAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
