//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data.

mod repository;
mod store;

pub use repository::*;
pub use store::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tbl_dept (
            dept_id INTEGER PRIMARY KEY AUTOINCREMENT,
            dept_name TEXT NOT NULL
        );

        INSERT OR IGNORE INTO tbl_dept (dept_id, dept_name) VALUES (1, '开发部');
        INSERT OR IGNORE INTO tbl_dept (dept_id, dept_name) VALUES (2, '测试部');
        "#,
    )
    .execute(pool)
    .await?;

    // Every employee column except the id is nullable: updates overwrite the
    // whole row and absent form fields clear the column.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tbl_emp (
            emp_id INTEGER PRIMARY KEY AUTOINCREMENT,
            emp_name TEXT,
            gender TEXT,
            email TEXT,
            d_id INTEGER REFERENCES tbl_dept(dept_id),
            birthday TEXT,
            hire_date TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_emp_name ON tbl_emp(emp_name);
        CREATE INDEX IF NOT EXISTS idx_emp_d_id ON tbl_emp(d_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
