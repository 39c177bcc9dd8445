use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to encode metrics: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("metrics output is not utf-8: {0}")]
    MetricsUtf8(#[from] std::string::FromUtf8Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
