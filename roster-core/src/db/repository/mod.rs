//! Repository Module
//!
//! CRUD over the trainer and trainee tables. Lookups exclude inactive
//! rows; the id and phone uniqueness checks deliberately do not — a freed
//! number must never collide with a dormant record.

pub mod employee;
pub mod trainee;
pub mod trainer;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    /// A cascade write applied partially; the surrounding transaction has
    /// been rolled back.
    #[error("Invariant violation: {0}")]
    Invariant(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// The only columns `update_column` may rewrite. Routing the choice
/// through an enum keeps caller input out of the SQL text entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateColumn {
    Name,
    PhoneNumber,
    Designation,
    Role,
}

impl UpdateColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            UpdateColumn::Name => "name",
            UpdateColumn::PhoneNumber => "phone_number",
            UpdateColumn::Designation => "designation",
            UpdateColumn::Role => "role",
        }
    }
}
