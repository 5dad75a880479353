//! API error type with HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::OrderError;
use domain::repository::RepositoryError;

/// API-level error that maps to an HTTP response.
///
/// Every failure renders as `{"success": false, "error": <message>}`.
/// Client-input problems never map to a 5xx status.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (bad identifier, unparseable body field).
    BadRequest(String),
    /// Failure signaled by the order workflow.
    Workflow(OrderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Workflow(err) => workflow_error_to_response(err),
        };

        let body = serde_json::json!({ "success": false, "error": message });
        (status, Json(body)).into_response()
    }
}

fn workflow_error_to_response(err: OrderError) -> (StatusCode, String) {
    let status = match &err {
        OrderError::CustomerNotFound(_)
        | OrderError::ProductNotFound(_)
        | OrderError::OrderNotFound(_) => StatusCode::NOT_FOUND,
        OrderError::InvalidStatus { .. } | OrderError::InvalidQuantity { .. } => {
            StatusCode::BAD_REQUEST
        }
        OrderError::InsufficientStock { .. } | OrderError::InvalidCancellation(_) => {
            StatusCode::CONFLICT
        }
        OrderError::OperationFailed(msg) => {
            tracing::error!(error = %msg, "workflow operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, err.to_string())
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError::Workflow(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Workflow(err.into())
    }
}
