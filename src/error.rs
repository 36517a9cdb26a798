use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Debug;

use crate::entities::Provider;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("environment variable error: {0}")]
    Config(String),

    #[error("{provider} transport error: {message}")]
    Transport { provider: Provider, message: String },

    #[error("{provider} returned a malformed response: {message}")]
    MalformedResponse { provider: Provider, message: String },

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("failed to encode request for {provider}: {message}")]
    Encode { provider: Provider, message: String },

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("invalid point: {0} must have a non-zero latitude and longitude")]
    InvalidPoint(&'static str),

    #[error("invalid provider service type: {0}")]
    InvalidProvider(String),
}

impl Error {
    pub fn code(&self) -> i32 {
        match self {
            Self::Config(_) => 1,
            Self::Transport { .. } => 3,
            Self::MalformedResponse { .. } => 4,
            Self::UnknownProvider(_) => 5,
            Self::Server(_) => 6,
            Self::Encode { .. } => 7,
            Self::MalformedRequest(_) => 101,
            Self::InvalidPoint(_) => 102,
            Self::InvalidProvider(_) => 103,
        }
    }

    /// Validation and decode failures are the caller's fault.
    pub fn is_client_error(&self) -> bool {
        self.code() >= 100
    }
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, error_message) = match self.code() {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, message.as_str()),
        };

        let body = Json(json!({
            "code": self.code(),
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn env_var_error<T: Debug>(err: T) -> Error {
    Error::Config(format!("{:?}", err))
}

pub fn transport_error(provider: Provider, err: reqwest::Error) -> Error {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else if let Some(status) = err.status() {
        format!("upstream answered with status {}", status.as_u16())
    } else {
        err.to_string()
    };

    Error::Transport { provider, message }
}

pub fn malformed_response_error(provider: Provider, err: serde_json::Error) -> Error {
    Error::MalformedResponse {
        provider,
        message: err.to_string(),
    }
}
