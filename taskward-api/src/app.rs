/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use taskward_api::{app::{build_router, AppState}, config::Config};
/// use taskward_shared::store::Store;
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(Store::new(pool), config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use crate::routes;
use crate::services::{EmployeeService, HospitalService, TaskService};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use taskward_shared::store::Store;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The
/// services are constructed once here, each holding its own store handle;
/// there is no ambient/global store.
#[derive(Clone)]
pub struct AppState {
    /// Hospital domain service
    pub hospitals: HospitalService,

    /// Employee domain service
    pub employees: EmployeeService,

    /// Task domain service
    pub tasks: TaskService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state, wiring each service to the store
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            hospitals: HospitalService::new(store.clone()),
            employees: EmployeeService::new(store.clone()),
            tasks: TaskService::new(store),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /-/health                          # Liveness (plain "OK")
/// └── /api/
///     ├── GET  POST /hospitals
///     ├── GET  PUT  /hospitals/:id
///     ├── GET  POST /hospitals/:id/employees
///     ├── GET  POST /hospitals/:id/tasks
///     ├── GET       /employees/:id
///     ├── GET       /employees/:id/tasks
///     ├──      PUT  /tasks/:id
///     └──      POST /tasks/:id/assign
/// ```
///
/// Middleware: access logging (tower-http `TraceLayer`) and CORS, both
/// outermost so they also cover error responses.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/hospitals",
            get(routes::hospitals::list_hospitals).post(routes::hospitals::create_hospital),
        )
        .route(
            "/hospitals/:id",
            get(routes::hospitals::get_hospital).put(routes::hospitals::update_hospital),
        )
        .route(
            "/hospitals/:id/employees",
            get(routes::employees::list_employees).post(routes::employees::create_employee),
        )
        .route("/employees/:id", get(routes::employees::get_employee))
        .route(
            "/hospitals/:id/tasks",
            get(routes::tasks::list_hospital_tasks).post(routes::tasks::create_task),
        )
        .route("/employees/:id/tasks", get(routes::tasks::list_employee_tasks))
        .route("/tasks/:id", put(routes::tasks::update_task))
        .route("/tasks/:id/assign", post(routes::tasks::assign_task));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/-/health", get(routes::health::health_check))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
