mod handlers;
mod middleware;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::post, Router};

use crate::api::{DynAPI, API};
use crate::error::Error;
use crate::server::handlers::calculate;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/calculate", post(calculate::create))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(Arc::new(api) as DynAPI);

    tracing::info!("listening on {}", addr);

    axum::Server::try_bind(&addr)
        .map_err(|err| Error::Server(err.to_string()))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| Error::Server(err.to_string()))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
