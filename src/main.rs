//! Employee CRUD Backend
//!
//! A REST backend with SQLite persistence for creating, listing, updating and
//! deleting employees.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod validation;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::{DepartmentStore, EmployeeStore, Repository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeStore>,
    pub departments: Arc<dyn DepartmentStore>,
}

impl AppState {
    /// State backed by a single SQLite repository.
    pub fn from_repository(repo: Repository) -> Self {
        let repo = Arc::new(repo);
        Self {
            employees: repo.clone(),
            departments: repo,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Employee CRUD Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let state = AppState::from_repository(Repository::new(pool));

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Employees
        .route("/emps", get(api::list_employees))
        .route("/emp", post(api::create_employee))
        .route(
            "/emp/{id}",
            get(api::get_employee)
                .put(api::update_employee)
                .delete(api::delete_employees),
        )
        .route("/checkuser", get(api::check_user))
        // Departments
        .route("/depts", get(api::list_departments));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
