/// Health check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /-/health
/// ```
///
/// Returns plain `OK`. Liveness only; database connectivity is verified at
/// startup by the pool's health check.

pub async fn health_check() -> &'static str {
    "OK"
}
