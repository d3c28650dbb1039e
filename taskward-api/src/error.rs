/// Error handling for the API server
///
/// `ApiError` is the transport tier of the three-tier error mapping:
/// driver error → store sentinel → `ServiceError` → HTTP status. Handlers
/// return `Result<T, ApiError>`, which renders the structured
/// `{"error": {"code", "msg"}}` envelope.
///
/// # Example
///
/// ```
/// use taskward_api::error::{ApiError, ApiResult};
/// use axum::Json;
/// use serde_json::json;
///
/// async fn handler() -> ApiResult<Json<serde_json::Value>> {
///     Err(ApiError::BadArgument("name is required".to_string()))
/// }
/// ```

use crate::services::ServiceError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input (400)
    BadArgument(String),

    /// Referenced entity absent (404)
    NotFound(String),

    /// Uniqueness violation (409)
    AlreadyExists(String),

    /// Cross-entity ownership mismatch (403)
    PermissionDenied(String),

    /// Anything else, including unclassified store failures (500)
    Internal(String),
}

/// Error envelope body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error code and message inside the envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// One of the server-defined error codes
    pub code: String,

    /// Human-readable error message
    pub msg: String,
}

impl ApiError {
    /// The wire-level error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadArgument(_) => "BadArgument",
            ApiError::NotFound(_) => "ResourceNotFound",
            ApiError::AlreadyExists(_) => "AlreadyExists",
            ApiError::PermissionDenied(_) => "PermissionDenied",
            ApiError::Internal(_) => "InternalError",
        }
    }

    /// The HTTP status the error code maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists(_) => StatusCode::CONFLICT,
            ApiError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadArgument(msg)
            | ApiError::NotFound(msg)
            | ApiError::AlreadyExists(msg)
            | ApiError::PermissionDenied(msg)
            | ApiError::Internal(msg) => write!(f, "{}: {}", self.code(), msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();

        let msg = match self {
            // Log internal errors but don't expose details to clients
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                "an internal error occurred".to_string()
            }
            ApiError::BadArgument(msg)
            | ApiError::NotFound(msg)
            | ApiError::AlreadyExists(msg)
            | ApiError::PermissionDenied(msg) => msg,
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail { code, msg },
        });

        (status, body).into_response()
    }
}

/// Service errors map one-to-one onto the transport taxonomy
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::BadArgument(msg) => ApiError::BadArgument(msg),
            ServiceError::ResourceNotFound(msg) => ApiError::NotFound(msg),
            ServiceError::AlreadyExists(msg) => ApiError::AlreadyExists(msg),
            ServiceError::PermissionDenied(msg) => ApiError::PermissionDenied(msg),
            ServiceError::Internal(source) => ApiError::Internal(source.to_string()),
        }
    }
}

/// Extractor rejections are malformed input, so they render through the
/// same envelope as handler-level validation instead of axum's plain-text
/// defaults. Wired up by the wrapper extractors in `routes`.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadArgument(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadArgument(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadArgument(rejection.body_text())
    }
}
