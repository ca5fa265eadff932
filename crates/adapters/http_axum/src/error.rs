//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tradehub_domain::error::TradeHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TradeHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(TradeHubError);

impl From<TradeHubError> for ApiError {
    fn from(err: TradeHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TradeHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            TradeHubError::Category(err) => (StatusCode::CONFLICT, err.to_string()),
            TradeHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            TradeHubError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            TradeHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
