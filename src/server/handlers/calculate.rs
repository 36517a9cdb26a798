use axum::body::Bytes;
use axum::extract::{Extension, Json};

use crate::{
    api::DynAPI,
    entities::{Calculate, EtaResult},
    error::Error,
};

pub async fn create(
    Extension(api): Extension<DynAPI>,
    body: Bytes,
) -> Result<Json<EtaResult>, Error> {
    let result = match Calculate::from_slice(&body) {
        Ok(calculate) => api.calculate(calculate).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(eta) => Ok(eta.into()),
        Err(err) if err.is_client_error() => {
            tracing::warn!(code = err.code(), "rejected request: {}", err);
            Err(err)
        }
        Err(err) => {
            tracing::error!(code = err.code(), "failed to calculate eta: {}", err);
            Err(err)
        }
    }
}
