//! Department API endpoints.

use axum::extract::State;

use super::{ApiResponse, ApiResult};
use crate::AppState;

/// GET /depts - List all departments.
pub async fn list_departments(State(state): State<AppState>) -> ApiResult {
    let depts = state.departments.find_all().await?;
    Ok(ApiResponse::success().add("depts", depts))
}
