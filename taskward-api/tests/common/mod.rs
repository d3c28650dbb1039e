/// Common test utilities for integration tests
///
/// Provides shared infrastructure:
/// - Test database setup (schema creation + truncation between tests)
/// - An in-process `axum::Router` wired exactly like production
/// - Request/response helpers for driving the router
///
/// Tests require a live PostgreSQL instance named by `DATABASE_URL`; when
/// the variable is unset each test skips itself. A process-wide lock
/// serializes tests because they share one database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use taskward_api::app::{build_router, AppState};
use taskward_api::config::{ApiConfig, Config, DatabaseConfig};
use taskward_shared::store::Store;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt as _;

static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Builds the router over a lazily-connecting pool
///
/// Extractor rejections short-circuit before any handler runs, so requests
/// exercising them never touch the database and need no live server.
pub fn offline_app() -> Router {
    let url = "postgresql://localhost/taskward_offline".to_string();
    let config = Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: url.clone(),
            max_connections: 1,
        },
    };

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&url)
        .expect("failed to build lazy pool");

    build_router(AppState::new(Store::new(pool), config))
}

/// Dispatches a prepared request through a router and returns status +
/// parsed body; an empty response body comes back as `Value::Null`
pub async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Builds and dispatches a request, setting the JSON content type when a
/// body is given
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    dispatch(app, request).await
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS hospital (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    display_name TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);
CREATE TABLE IF NOT EXISTS employee (
    id BIGSERIAL PRIMARY KEY,
    hospital_id BIGINT NOT NULL REFERENCES hospital(id),
    username TEXT NOT NULL UNIQUE,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);
CREATE TABLE IF NOT EXISTS task (
    id BIGSERIAL PRIMARY KEY,
    hospital_id BIGINT NOT NULL REFERENCES hospital(id),
    owner_id BIGINT NOT NULL REFERENCES employee(id),
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    priority TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);
"#;

/// Test context holding the router and a store handle for direct
/// persistence-layer assertions
pub struct TestContext {
    pub app: Router,
    pub store: Store,
    _guard: MutexGuard<'static, ()>,
}

impl TestContext {
    /// Creates a context over a fresh (truncated) database
    ///
    /// Returns `None` when `DATABASE_URL` is not configured so the caller
    /// can skip.
    pub async fn new() -> Option<Self> {
        dotenvy::dotenv().ok();
        let url = std::env::var("DATABASE_URL").ok()?;

        let guard = DB_LOCK.lock().await;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("failed to connect to test database");

        for statement in SCHEMA.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .expect("failed to create test schema");
        }

        sqlx::query("TRUNCATE TABLE task, employee, hospital RESTART IDENTITY CASCADE")
            .execute(&pool)
            .await
            .expect("failed to truncate test tables");

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
            },
        };

        let store = Store::new(pool);
        let state = AppState::new(store.clone(), config);
        let app = build_router(state);

        Some(Self {
            app,
            store,
            _guard: guard,
        })
    }

    /// Sends a request through the router and returns status + parsed body
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        send(&self.app, method, uri, body).await
    }

    /// Creates a hospital via the API, asserting 201
    pub async fn create_hospital(&self, name: &str, display_name: &str) -> serde_json::Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/hospitals",
                Some(serde_json::json!({ "name": name, "displayName": display_name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create hospital: {body}");
        body
    }

    /// Creates an employee via the API, asserting 201
    pub async fn create_employee(&self, hospital_id: i64, username: &str) -> serde_json::Value {
        let (status, body) = self
            .send(
                "POST",
                &format!("/api/hospitals/{hospital_id}/employees"),
                Some(serde_json::json!({ "username": username })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create employee: {body}");
        body
    }

    /// Creates a task via the API, asserting 201
    pub async fn create_task(
        &self,
        hospital_id: i64,
        owner_id: i64,
        title: &str,
        priority: &str,
    ) -> serde_json::Value {
        let (status, body) = self
            .send(
                "POST",
                &format!("/api/hospitals/{hospital_id}/tasks"),
                Some(serde_json::json!({
                    "ownerId": owner_id,
                    "title": title,
                    "priority": priority,
                    "status": "OPEN",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create task: {body}");
        body
    }
}

/// Skips the calling test (with a note) when no database is configured
#[macro_export]
macro_rules! require_db {
    () => {
        match common::TestContext::new().await {
            Some(ctx) => ctx,
            None => {
                eprintln!("skipping: DATABASE_URL not set");
                return;
            }
        }
    };
}
