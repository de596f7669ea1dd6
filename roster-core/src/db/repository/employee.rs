//! Cross-variant checks
//!
//! Identifier and phone uniqueness hold over the whole employee
//! population: both tables, active and inactive rows combined.

use sqlx::{Executor, Sqlite};

use super::RepoResult;

/// Whether any employee, active or not, already uses this phone number.
pub async fn phone_number_exists<'a, E>(db: E, phone_number: &str) -> RepoResult<bool>
where
    E: Executor<'a, Database = Sqlite>,
{
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM trainer WHERE phone_number = ?1)
             OR EXISTS (SELECT 1 FROM trainee WHERE phone_number = ?1)",
    )
    .bind(phone_number)
    .fetch_one(db)
    .await?;
    Ok(exists)
}

/// Whether any employee, active or not, already holds this identifier.
pub async fn id_exists<'a, E>(db: E, id: &str) -> RepoResult<bool>
where
    E: Executor<'a, Database = Sqlite>,
{
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM trainer WHERE id = ?1)
             OR EXISTS (SELECT 1 FROM trainee WHERE id = ?1)",
    )
    .bind(id)
    .fetch_one(db)
    .await?;
    Ok(exists)
}
