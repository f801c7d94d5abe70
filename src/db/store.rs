//! Store interfaces the request handlers depend on.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Department, Employee, EmployeeForm, PageInfo};

/// Persistence operations on employees.
///
/// Writes are lenient: updating or deleting an id that does not exist is not an error.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert a new employee and return its assigned id.
    async fn insert(&self, employee: &EmployeeForm) -> Result<i64, AppError>;

    /// Overwrite every column of the employee with id `id`.
    async fn update_by_id(&self, id: i32, employee: &EmployeeForm) -> Result<(), AppError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;

    /// Delete all listed ids in one statement. Duplicates are allowed.
    async fn delete_by_ids(&self, ids: &[i32]) -> Result<(), AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Employee>, AppError>;

    /// All employees ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    /// One page of employees ordered by id.
    ///
    /// Out-of-range page numbers are clamped to the first or last page.
    async fn find_page(&self, page_num: i64, page_size: i64)
        -> Result<PageInfo<Employee>, AppError>;
}

/// Read access to departments.
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// All departments ordered by id.
    async fn find_all(&self) -> Result<Vec<Department>, AppError>;
}
