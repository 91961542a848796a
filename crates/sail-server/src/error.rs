use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sail_core::error::AppError;
use sail_core::models::Provider;

use crate::dto::EventsResponse;

/// A failed load, tagged with the provider that was asked for markup.
pub struct ApiError {
    pub provider: Provider,
    pub error: AppError,
}

impl ApiError {
    pub fn new(provider: Provider, error: AppError) -> Self {
        Self { provider, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(
            provider = %self.provider,
            kind = self.error.kind(),
            "Failed to load events: {}",
            self.error
        );

        let stage = if self.error.is_transport() {
            "fetch markup"
        } else {
            "load events"
        };
        let body = EventsResponse::failure(
            self.provider,
            self.error.kind(),
            format!(
                "Failed to {stage} from the {} provider: {}",
                self.provider, self.error
            ),
        );

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
