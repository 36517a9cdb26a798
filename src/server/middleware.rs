use std::time::Instant;

use axum::{http::Request, middleware::Next, response::IntoResponse};
use tracing::Instrument;
use uuid::Uuid;

/// Logs every inbound request under its own span.
pub async fn log_request<B>(req: Request<B>, next: Next<B>) -> impl IntoResponse {
    let span = tracing::info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let started = Instant::now();
        tracing::info!("request received");

        let response = next.run(req).await;

        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request finished"
        );

        response
    }
    .instrument(span)
    .await
}
