//! Trainee Repository

use shared::models::Trainee;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, UpdateColumn, employee};

const TRAINEE_SELECT: &str = "SELECT id, name, email, phone_number, date_of_birth, date_of_joining, designation, role, salary, batch_name, trainer_id, is_active FROM trainee";

/// Insert a new trainee.
///
/// The global id/phone uniqueness checks and the INSERT run in one
/// transaction; UNIQUE(phone_number) backs them up at the storage layer.
pub async fn insert(pool: &SqlitePool, trainee: &Trainee) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    if employee::id_exists(&mut *tx, &trainee.employee.id).await? {
        return Err(RepoError::Duplicate(format!(
            "Employee id '{}' already exists",
            trainee.employee.id
        )));
    }
    if employee::phone_number_exists(&mut *tx, &trainee.employee.phone_number).await? {
        return Err(RepoError::Duplicate(format!(
            "Phone number '{}' already exists",
            trainee.employee.phone_number
        )));
    }

    let result = sqlx::query(
        "INSERT INTO trainee (id, name, email, phone_number, date_of_birth, date_of_joining, designation, role, salary, batch_name, trainer_id, is_active) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 1)",
    )
    .bind(&trainee.employee.id)
    .bind(&trainee.employee.name)
    .bind(&trainee.employee.email)
    .bind(&trainee.employee.phone_number)
    .bind(trainee.employee.date_of_birth)
    .bind(trainee.employee.date_of_joining)
    .bind(&trainee.employee.designation)
    .bind(trainee.employee.role)
    .bind(trainee.employee.salary)
    .bind(&trainee.batch_name)
    .bind(trainee.trainer_id.as_deref())
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() != 1 {
        return Err(RepoError::Database("Trainee row was not written".into()));
    }

    tx.commit().await?;
    tracing::debug!(id = %trainee.employee.id, "trainee inserted");
    Ok(())
}

/// Fetch an active trainee.
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Trainee>> {
    let sql = format!("{TRAINEE_SELECT} WHERE id = ? AND is_active = 1");
    let trainee: Option<Trainee> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(trainee)
}

/// Include-inactive fetch, the only path that can still see a soft-deleted
/// trainee.
pub async fn find_by_id_with_inactive(pool: &SqlitePool, id: &str) -> RepoResult<Option<Trainee>> {
    let sql = format!("{TRAINEE_SELECT} WHERE id = ?");
    let trainee: Option<Trainee> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(trainee)
}

/// Rewrite a single enumerated column on an active trainee.
pub async fn update_column(
    pool: &SqlitePool,
    id: &str,
    column: UpdateColumn,
    value: &str,
) -> RepoResult<()> {
    let sql = format!(
        "UPDATE trainee SET {} = ? WHERE id = ? AND is_active = 1",
        column.column_name()
    );
    let rows = sqlx::query(&sql).bind(value).bind(id).execute(pool).await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Trainee {id} not found")));
    }
    tracing::debug!(id, column = column.column_name(), "trainee updated");
    Ok(())
}

/// Soft delete: deactivate the trainee and, when a trainer was assigned,
/// decrement that trainer's cached count in the same transaction.
pub async fn soft_delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    let trainer_id: Option<Option<String>> =
        sqlx::query_scalar("SELECT trainer_id FROM trainee WHERE id = ? AND is_active = 1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some(trainer_id) = trainer_id else {
        return Ok(false);
    };

    let rows = sqlx::query("UPDATE trainee SET is_active = 0 WHERE id = ? AND is_active = 1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Ok(false);
    }

    if let Some(trainer_id) = trainer_id {
        let dec = sqlx::query(
            "UPDATE trainer SET trainee_count = trainee_count - 1 WHERE id = ? AND trainee_count > 0",
        )
        .bind(&trainer_id)
        .execute(&mut *tx)
        .await?;
        // A referenced trainer whose count is already zero means the cached
        // value diverged from the trainee table; roll everything back.
        if dec.rows_affected() == 0 {
            return Err(RepoError::Invariant(format!(
                "Trainer {trainer_id} count not decremented for deleted trainee {id}"
            )));
        }
    }

    tx.commit().await?;
    tracing::info!(id, "trainee soft-deleted");
    Ok(true)
}
