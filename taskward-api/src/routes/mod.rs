/// API route handlers
///
/// Handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `hospitals`: Hospital CRUD
/// - `employees`: Employee creation and lookup
/// - `tasks`: Task CRUD and assignment
///
/// Shared here: the pagination query shape used by every list endpoint, and
/// the `Json`/`Path`/`Query` extractors whose rejections render through the
/// `{"error": {"code", "msg"}}` envelope as `BadArgument` instead of axum's
/// plain-text defaults.

pub mod employees;
pub mod health;
pub mod hospitals;
pub mod tasks;

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// `axum::Json` with the rejection mapped into the error envelope
///
/// Also usable as a response body, delegating to `axum::Json`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// `axum::extract::Path` with the rejection mapped into the error envelope
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

/// `axum::extract::Query` with the rejection mapped into the error envelope
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);

/// Pagination query parameters (`?page=&limit=`)
///
/// `page` is 1-based; values below 1 clamp to the first page. `limit`
/// defaults to 20; values of 0 or less reset to the default and values
/// above 100 clamp to 100.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl PageQuery {
    pub const DEFAULT_LIMIT: i64 = 20;
    pub const MAX_LIMIT: i64 = 100;

    /// Applies the clamping rules and returns `(offset, limit)` for the store
    pub fn normalize(self) -> (i64, i64) {
        let page = self.page.max(1);
        let limit = match self.limit {
            l if l <= 0 => Self::DEFAULT_LIMIT,
            l if l > Self::MAX_LIMIT => Self::MAX_LIMIT,
            l => l,
        };
        ((page - 1) * limit, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let (offset, limit) = PageQuery::default().normalize();
        assert_eq!(offset, 0);
        assert_eq!(limit, 20);
    }

    #[test]
    fn test_page_below_one_clamps_to_first_page() {
        let (offset, _) = PageQuery { page: 0, limit: 20 }.normalize();
        assert_eq!(offset, 0);
        let (offset, _) = PageQuery { page: -3, limit: 20 }.normalize();
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_limit_above_max_clamps() {
        let (_, limit) = PageQuery { page: 1, limit: 500 }.normalize();
        assert_eq!(limit, 100);
    }

    #[test]
    fn test_nonpositive_limit_resets_to_default() {
        let (_, limit) = PageQuery { page: 1, limit: 0 }.normalize();
        assert_eq!(limit, 20);
        let (_, limit) = PageQuery { page: 1, limit: -5 }.normalize();
        assert_eq!(limit, 20);
    }

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        let (offset, limit) = PageQuery { page: 3, limit: 25 }.normalize();
        assert_eq!(offset, 50);
        assert_eq!(limit, 25);
    }

    #[tokio::test]
    async fn test_json_rejection_renders_bad_argument() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"page": "x"}"#))
            .unwrap();

        let err = Json::<PageQuery>::from_request(request, &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BadArgument");
    }

    #[tokio::test]
    async fn test_query_rejection_renders_bad_argument() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/hospitals?page=abc")
            .body(())
            .unwrap()
            .into_parts();

        let err = Query::<PageQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BadArgument");
    }
}
