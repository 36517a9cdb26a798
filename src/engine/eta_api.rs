use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{EtaAPI, API},
    entities::{Calculate, EtaResult},
    error::Error,
};

#[async_trait]
impl EtaAPI for Engine {
    #[tracing::instrument(skip_all)]
    async fn calculate(&self, calculate: Calculate) -> Result<EtaResult, Error> {
        calculate.validate()?;

        tracing::info!("received a valid request: {}", calculate);

        self.dispatch(calculate).await
    }
}

impl API for Engine {}
