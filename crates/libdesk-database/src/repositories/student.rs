//! Student directory repository.

use serde::Serialize;
use sqlx::SqlitePool;

use libdesk_core::error::{AppError, ErrorKind};
use libdesk_core::result::AppResult;

/// A row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StudentRecord {
    /// Roll number (primary key).
    pub roll_no: String,
    /// Display name.
    pub name: String,
}

impl StudentRecord {
    /// Create a new record.
    pub fn new(roll_no: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            roll_no: roll_no.into(),
            name: name.into(),
        }
    }
}

/// Repository for the student directory.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up only the display name for a roll number.
    pub async fn find_name(&self, roll_no: &str) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM students WHERE roll_no = ?")
            .bind(roll_no)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to look up student name", e)
            })
    }

    /// Find a full student record by roll number.
    pub async fn find_by_roll_no(&self, roll_no: &str) -> AppResult<Option<StudentRecord>> {
        sqlx::query_as::<_, StudentRecord>(
            "SELECT roll_no, name FROM students WHERE roll_no = ?",
        )
        .bind(roll_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find student", e))
    }

    /// List every student, numeric-looking roll numbers in natural order.
    pub async fn list_all(&self) -> AppResult<Vec<StudentRecord>> {
        sqlx::query_as::<_, StudentRecord>(
            "SELECT roll_no, name FROM students ORDER BY LENGTH(roll_no), roll_no",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    /// Count students in the directory.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count students", e))
    }

    /// Insert students, leaving existing roll numbers untouched.
    ///
    /// Runs in one transaction and returns the number of rows inserted.
    pub async fn insert_ignore_many(&self, students: &[StudentRecord]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut inserted = 0;
        for student in students {
            let result = sqlx::query("INSERT OR IGNORE INTO students (roll_no, name) VALUES (?, ?)")
                .bind(&student.roll_no)
                .bind(&student.name)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        format!("Failed to insert student '{}'", student.roll_no),
                        e,
                    )
                })?;
            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(inserted)
    }
}
