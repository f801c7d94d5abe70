//! Employee API endpoints.

use axum::extract::{Path, State};
use serde::Deserialize;

use super::{ApiResponse, ApiResult, AppForm, AppQuery};
use crate::errors::AppError;
use crate::models::EmployeeForm;
use crate::validation::{
    error_fields, is_valid_username, validate_employee, MSG_USERNAME_MALFORMED,
    MSG_USERNAME_UNAVAILABLE,
};
use crate::AppState;

/// Rows per page on the employee list.
pub const PAGE_SIZE: i64 = 5;

/// Target of DELETE /emp/{ids}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSpec {
    Single(i32),
    Batch(Vec<i32>),
}

/// Parse `"N"` or `"N-N-N..."` into ids.
///
/// Order and duplicates are kept. Trailing empty segments (`"1-2-"`) are
/// dropped; any other segment that is not an integer rejects the whole input.
pub fn parse_id_spec(spec: &str) -> Result<IdSpec, AppError> {
    if spec.contains('-') {
        let ids = spec
            .trim_end_matches('-')
            .split('-')
            .map(parse_id)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IdSpec::Batch(ids))
    } else {
        parse_id(spec).map(IdSpec::Single)
    }
}

fn parse_id(segment: &str) -> Result<i32, AppError> {
    segment
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid employee id: {:?}", segment)))
}

/// DELETE /emp/{ids} - Delete one employee or a hyphen-joined batch.
pub async fn delete_employees(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> ApiResult {
    match parse_id_spec(&ids)? {
        IdSpec::Single(id) => state.employees.delete_by_id(id).await?,
        IdSpec::Batch(ids) => state.employees.delete_by_ids(&ids).await?,
    }

    tracing::info!("Deleted employees {}", ids);
    Ok(ApiResponse::success())
}

/// PUT /emp/{empId} - Replace an employee's fields.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<String>,
    AppForm(form): AppForm<EmployeeForm>,
) -> ApiResult {
    let id = parse_id(&emp_id)?;
    state.employees.update_by_id(id, &form).await?;

    tracing::info!("Updated employee {}", id);
    Ok(ApiResponse::success())
}

/// GET /emp/{id} - Get a single employee. A missing row yields `emp: null`.
pub async fn get_employee(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let id = parse_id(&id)?;
    let employee = state.employees.find_by_id(id).await?;

    Ok(ApiResponse::success().add("emp", employee))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUserQuery {
    pub emp_name: String,
}

/// GET /checkuser?empName= - Check that a username is well formed and unused.
pub async fn check_user(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CheckUserQuery>,
) -> ApiResult {
    if !is_valid_username(&query.emp_name) {
        return Ok(ApiResponse::fail().add("va_msg", MSG_USERNAME_MALFORMED));
    }

    match state.employees.find_by_name(&query.emp_name).await? {
        Some(_) => Ok(ApiResponse::fail().add("va_msg", MSG_USERNAME_UNAVAILABLE)),
        None => Ok(ApiResponse::success()),
    }
}

/// POST /emp - Validate and insert a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    AppForm(form): AppForm<EmployeeForm>,
) -> ApiResult {
    let errors = validate_employee(&form);
    if !errors.is_empty() {
        for err in &errors {
            tracing::debug!(field = err.field, reason = err.message, "Validation failed");
        }
        return Ok(ApiResponse::fail().add("errorFields", error_fields(&errors)));
    }

    let id = state.employees.insert(&form).await?;

    tracing::info!("Created employee {}", id);
    Ok(ApiResponse::success())
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub pn: Option<i64>,
}

/// GET /emps?pn= - One page of employees with pager metadata.
pub async fn list_employees(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PageQuery>,
) -> ApiResult {
    let page_num = query.pn.unwrap_or(1);
    let page = state.employees.find_page(page_num, PAGE_SIZE).await?;

    Ok(ApiResponse::success().add("pageInfo", page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_id() {
        assert_eq!(parse_id_spec("1").unwrap(), IdSpec::Single(1));
        assert_eq!(parse_id_spec("42").unwrap(), IdSpec::Single(42));
    }

    #[test]
    fn test_parse_batch_ids() {
        assert_eq!(parse_id_spec("1-2").unwrap(), IdSpec::Batch(vec![1, 2]));
        assert_eq!(
            parse_id_spec("1-2-3").unwrap(),
            IdSpec::Batch(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        assert_eq!(
            parse_id_spec("3-1-3").unwrap(),
            IdSpec::Batch(vec![3, 1, 3])
        );
    }

    #[test]
    fn test_parse_drops_trailing_empty_segments() {
        assert_eq!(parse_id_spec("1-2-").unwrap(), IdSpec::Batch(vec![1, 2]));
        assert_eq!(parse_id_spec("1-2--").unwrap(), IdSpec::Batch(vec![1, 2]));
        assert_eq!(parse_id_spec("7-").unwrap(), IdSpec::Batch(vec![7]));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for spec in ["1-a-3", "a", "", "1--2", "-1", "-", "--", "99999999999"] {
            let err = parse_id_spec(spec).unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest(_)),
                "{:?} should be rejected",
                spec
            );
        }
    }
}
