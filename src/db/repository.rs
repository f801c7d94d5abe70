//! SQLite repository implementing the employee and department stores.
//!
//! Uses prepared statements; each store call is a single atomic statement
//! except paging, which counts and selects.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use super::{DepartmentStore, EmployeeStore};
use crate::errors::AppError;
use crate::models::{page_offset, reasonable_page, Department, Employee, EmployeeForm, PageInfo};

const EMPLOYEE_SELECT: &str = r#"SELECT e.emp_id, e.emp_name, e.gender, e.email, e.d_id,
                 e.birthday, e.hire_date, d.dept_id, d.dept_name
          FROM tbl_emp e LEFT JOIN tbl_dept d ON e.d_id = d.dept_id"#;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count all employees.
    pub async fn count_employees(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM tbl_emp")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("total"))
    }
}

// ==================== EMPLOYEE OPERATIONS ====================

#[async_trait]
impl EmployeeStore for Repository {
    async fn insert(&self, employee: &EmployeeForm) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO tbl_emp (emp_name, gender, email, d_id, birthday, hire_date) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&employee.emp_name)
        .bind(employee.gender.map(|g| g.as_str()))
        .bind(&employee.email)
        .bind(employee.d_id)
        .bind(employee.birthday)
        .bind(employee.hire_date)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_by_id(&self, id: i32, employee: &EmployeeForm) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE tbl_emp SET emp_name = ?, gender = ?, email = ?, d_id = ?, birthday = ?, hire_date = ? WHERE emp_id = ?",
        )
        .bind(&employee.emp_name)
        .bind(employee.gender.map(|g| g.as_str()))
        .bind(&employee.email)
        .bind(employee.d_id)
        .bind(employee.birthday)
        .bind(employee.hire_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id, rows = result.rows_affected(), "Employee updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tbl_emp WHERE emp_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "Employee deleted");
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i32]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("DELETE FROM tbl_emp WHERE emp_id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = query.build().execute(&self.pool).await?;

        tracing::debug!(?ids, rows = result.rows_affected(), "Employees deleted");
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(&format!("{} WHERE e.emp_id = ?", EMPLOYEE_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(employee_from_row))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(&format!(
            "{} WHERE e.emp_name = ? ORDER BY e.emp_id LIMIT 1",
            EMPLOYEE_SELECT
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(employee_from_row))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query(&format!("{} ORDER BY e.emp_id", EMPLOYEE_SELECT))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(employee_from_row).collect())
    }

    async fn find_page(
        &self,
        page_num: i64,
        page_size: i64,
    ) -> Result<PageInfo<Employee>, AppError> {
        let page_size = page_size.max(1);
        let total = self.count_employees().await?;
        let page_num = reasonable_page(page_num, page_size, total);
        let offset = page_offset(page_num, page_size);

        let rows = sqlx::query(&format!(
            "{} ORDER BY e.emp_id LIMIT ? OFFSET ?",
            EMPLOYEE_SELECT
        ))
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let list = rows.iter().map(employee_from_row).collect();
        Ok(PageInfo::new(list, page_num, page_size, total))
    }
}

// ==================== DEPARTMENT OPERATIONS ====================

#[async_trait]
impl DepartmentStore for Repository {
    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        let rows = sqlx::query("SELECT dept_id, dept_name FROM tbl_dept ORDER BY dept_id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Department {
                dept_id: row.get("dept_id"),
                dept_name: row.get("dept_name"),
            })
            .collect())
    }
}

// Helper functions for row conversion

fn employee_from_row(row: &sqlx::sqlite::SqliteRow) -> Employee {
    let gender: Option<String> = row.get("gender");
    let dept_id: Option<i32> = row.get("dept_id");
    let dept_name: Option<String> = row.get("dept_name");
    let birthday: Option<NaiveDate> = row.get("birthday");
    let hire_date: Option<NaiveDate> = row.get("hire_date");

    Employee {
        emp_id: row.get("emp_id"),
        emp_name: row.get("emp_name"),
        gender: gender.and_then(|s| s.parse().ok()),
        email: row.get("email"),
        d_id: row.get("d_id"),
        birthday,
        hire_date,
        department: dept_id.map(|dept_id| Department {
            dept_id,
            dept_name: dept_name.unwrap_or_default(),
        }),
    }
}
