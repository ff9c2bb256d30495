//! HTTP error response mapping.
//!
//! - not found → `404 {"error": "<Entity> not found"}`
//! - validation → `400 {"errors": ["validation errors"]}`; the specific
//!   reason is logged, never echoed back
//! - storage → `500 {"error": "internal server error"}`

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sweetshop_domain::error::{NotFoundError, SweetShopError};

const VALIDATION_MESSAGE: &str = "validation errors";

/// JSON error body for a single failure.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON error body for rejected input.
#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<&'static str>,
}

/// Maps [`SweetShopError`] and request rejections to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the application or domain layer.
    Domain(SweetShopError),
    /// The request body was not valid JSON for the expected shape.
    InvalidBody(JsonRejection),
}

impl From<SweetShopError> for ApiError {
    fn from(err: SweetShopError) -> Self {
        Self::Domain(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::InvalidBody(err)
    }
}

fn validation_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationBody {
            errors: vec![VALIDATION_MESSAGE],
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidBody(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                validation_response()
            }
            Self::Domain(SweetShopError::Validation(err)) => {
                tracing::debug!(reason = %err, "validation failed");
                validation_response()
            }
            Self::Domain(SweetShopError::NotFound(err)) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::Domain(SweetShopError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
