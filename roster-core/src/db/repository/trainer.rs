//! Trainer Repository

use shared::models::{Trainee, Trainer};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, UpdateColumn, employee};

const TRAINER_SELECT: &str = "SELECT id, name, email, phone_number, date_of_birth, date_of_joining, designation, role, previous_work_experience, salary, project_name, batch_name, trainee_count, is_active FROM trainer";

const TRAINEE_SELECT: &str = "SELECT id, name, email, phone_number, date_of_birth, date_of_joining, designation, role, salary, batch_name, trainer_id, is_active FROM trainee";

/// Insert a new trainer.
///
/// The global id/phone uniqueness checks and the INSERT run in one
/// transaction; UNIQUE(phone_number) backs them up at the storage layer.
pub async fn insert(pool: &SqlitePool, trainer: &Trainer) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    if employee::id_exists(&mut *tx, &trainer.employee.id).await? {
        return Err(RepoError::Duplicate(format!(
            "Employee id '{}' already exists",
            trainer.employee.id
        )));
    }
    if employee::phone_number_exists(&mut *tx, &trainer.employee.phone_number).await? {
        return Err(RepoError::Duplicate(format!(
            "Phone number '{}' already exists",
            trainer.employee.phone_number
        )));
    }

    let result = sqlx::query(
        "INSERT INTO trainer (id, name, email, phone_number, date_of_birth, date_of_joining, designation, role, previous_work_experience, salary, project_name, batch_name, trainee_count, is_active) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, 0, 1)",
    )
    .bind(&trainer.employee.id)
    .bind(&trainer.employee.name)
    .bind(&trainer.employee.email)
    .bind(&trainer.employee.phone_number)
    .bind(trainer.employee.date_of_birth)
    .bind(trainer.employee.date_of_joining)
    .bind(&trainer.employee.designation)
    .bind(trainer.employee.role)
    .bind(trainer.previous_work_experience)
    .bind(trainer.employee.salary)
    .bind(&trainer.project_name)
    .bind(&trainer.batch_name)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() != 1 {
        return Err(RepoError::Database("Trainer row was not written".into()));
    }

    tx.commit().await?;
    tracing::debug!(id = %trainer.employee.id, "trainer inserted");
    Ok(())
}

/// Fetch an active trainer and attach its active trainees.
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Trainer>> {
    let sql = format!("{TRAINER_SELECT} WHERE id = ? AND is_active = 1");
    let trainer: Option<Trainer> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;

    let Some(mut trainer) = trainer else {
        return Ok(None);
    };
    // The cached count tells us whether the trainee query is worth running
    if trainer.trainee_count > 0 {
        trainer.trainees = find_assigned_trainees(pool, id).await?;
    }
    Ok(Some(trainer))
}

/// Include-inactive fetch, the only path that can still see a soft-deleted
/// trainer.
pub async fn find_by_id_with_inactive(pool: &SqlitePool, id: &str) -> RepoResult<Option<Trainer>> {
    let sql = format!("{TRAINER_SELECT} WHERE id = ?");
    let trainer: Option<Trainer> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;

    let Some(mut trainer) = trainer else {
        return Ok(None);
    };
    if trainer.trainee_count > 0 {
        trainer.trainees = find_assigned_trainees(pool, id).await?;
    }
    Ok(Some(trainer))
}

async fn find_assigned_trainees(pool: &SqlitePool, trainer_id: &str) -> RepoResult<Vec<Trainee>> {
    let sql = format!("{TRAINEE_SELECT} WHERE trainer_id = ? AND is_active = 1");
    let rows: Vec<Trainee> = sqlx::query_as(&sql).bind(trainer_id).fetch_all(pool).await?;
    Ok(rows)
}

/// Rewrite a single enumerated column on an active trainer.
pub async fn update_column(
    pool: &SqlitePool,
    id: &str,
    column: UpdateColumn,
    value: &str,
) -> RepoResult<()> {
    let sql = format!(
        "UPDATE trainer SET {} = ? WHERE id = ? AND is_active = 1",
        column.column_name()
    );
    let rows = sqlx::query(&sql).bind(value).bind(id).execute(pool).await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Trainer {id} not found")));
    }
    tracing::debug!(id, column = column.column_name(), "trainer updated");
    Ok(())
}

/// Soft delete: deactivate the trainer, zero its cached count, and release
/// every trainee still pointing at it, as one transaction.
pub async fn soft_delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        "UPDATE trainer SET is_active = 0, trainee_count = 0 WHERE id = ? AND is_active = 1",
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;
    if rows.rows_affected() == 0 {
        return Ok(false);
    }

    sqlx::query("UPDATE trainee SET trainer_id = NULL WHERE trainer_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(id, "trainer soft-deleted, trainees released");
    Ok(true)
}

/// Active-trainer existence check, run before assignment.
pub async fn exists(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM trainer WHERE id = ? AND is_active = 1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::fixtures::{test_pool, trainee as trainee_fixture, trainer as trainer_fixture};
    use crate::db::repository::trainee as trainee_repo;

    #[tokio::test]
    async fn test_insert_then_fetch_round_trip() {
        let pool = test_pool().await;
        let trainer = trainer_fixture("e5001", "Ana", "6111111111");
        insert(&pool, &trainer).await.unwrap();

        let fetched = find_by_id(&pool, "e5001").await.unwrap().unwrap();
        assert_eq!(fetched, trainer);
    }

    #[tokio::test]
    async fn test_duplicate_phone_number_rejected_first_record_kept() {
        let pool = test_pool().await;
        insert(&pool, &trainer_fixture("e5001", "Ana", "6111111111"))
            .await
            .unwrap();

        let err = insert(&pool, &trainer_fixture("e5002", "Bram", "6111111111"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        let kept = find_by_id(&pool, "e5001").await.unwrap().unwrap();
        assert!(kept.employee.is_active);
        assert!(find_by_id(&pool, "e5002").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_phone_across_variants_rejected() {
        let pool = test_pool().await;
        trainee_repo::insert(&pool, &trainee_fixture("e5001", "Cleo", "7222222222"))
            .await
            .unwrap();

        let err = insert(&pool, &trainer_fixture("e5002", "Dov", "7222222222"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let pool = test_pool().await;
        insert(&pool, &trainer_fixture("e5001", "Ana", "6111111111"))
            .await
            .unwrap();

        let err = insert(&pool, &trainer_fixture("e5001", "Eli", "8333333333"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_fetch_attaches_only_active_trainees() {
        let pool = test_pool().await;
        insert(&pool, &trainer_fixture("e5001", "Ana", "6111111111"))
            .await
            .unwrap();

        let mut assigned = trainee_fixture("e5002", "Bram", "7222222222");
        assigned.trainer_id = Some("e5001".to_string());
        trainee_repo::insert(&pool, &assigned).await.unwrap();
        // A dormant row pointing at the trainer must not be attached
        let mut dormant = trainee_fixture("e5003", "Cleo", "8333333333");
        dormant.trainer_id = Some("e5001".to_string());
        trainee_repo::insert(&pool, &dormant).await.unwrap();
        sqlx::query("UPDATE trainee SET is_active = 0 WHERE id = 'e5003'")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("UPDATE trainer SET trainee_count = 1 WHERE id = 'e5001'")
            .execute(&pool)
            .await
            .unwrap();

        let fetched = find_by_id(&pool, "e5001").await.unwrap().unwrap();
        assert_eq!(fetched.trainee_count, 1);
        assert_eq!(fetched.trainees.len(), 1);
        assert_eq!(fetched.trainees[0].employee.id, "e5002");
    }

    #[tokio::test]
    async fn test_update_column_restricted_to_active_rows() {
        let pool = test_pool().await;
        insert(&pool, &trainer_fixture("e5001", "Ana", "6111111111"))
            .await
            .unwrap();

        update_column(&pool, "e5001", UpdateColumn::Designation, "Principal Engineer")
            .await
            .unwrap();
        let fetched = find_by_id(&pool, "e5001").await.unwrap().unwrap();
        assert_eq!(fetched.employee.designation, "Principal Engineer");

        assert!(soft_delete(&pool, "e5001").await.unwrap());
        let err = update_column(&pool, "e5001", UpdateColumn::Name, "Other")
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_phone_update_hits_unique_backstop() {
        let pool = test_pool().await;
        insert(&pool, &trainer_fixture("e5001", "Ana", "6111111111"))
            .await
            .unwrap();
        insert(&pool, &trainer_fixture("e5002", "Bram", "7222222222"))
            .await
            .unwrap();

        let err = update_column(&pool, "e5002", UpdateColumn::PhoneNumber, "6111111111")
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_soft_delete_releases_trainees_and_zeroes_count() {
        let pool = test_pool().await;
        insert(&pool, &trainer_fixture("e5001", "Ana", "6111111111"))
            .await
            .unwrap();
        for (id, name, phone) in [
            ("e5002", "Bram", "7222222222"),
            ("e5003", "Cleo", "8333333333"),
        ] {
            let mut t = trainee_fixture(id, name, phone);
            t.trainer_id = Some("e5001".to_string());
            trainee_repo::insert(&pool, &t).await.unwrap();
        }
        sqlx::query("UPDATE trainer SET trainee_count = 2 WHERE id = 'e5001'")
            .execute(&pool)
            .await
            .unwrap();

        assert!(soft_delete(&pool, "e5001").await.unwrap());

        // Gone from the active path, intact behind the include-inactive one
        assert!(find_by_id(&pool, "e5001").await.unwrap().is_none());
        let archived = find_by_id_with_inactive(&pool, "e5001").await.unwrap().unwrap();
        assert!(!archived.employee.is_active);
        assert_eq!(archived.trainee_count, 0);

        for id in ["e5002", "e5003"] {
            let released = trainee_repo::find_by_id(&pool, id).await.unwrap().unwrap();
            assert_eq!(released.trainer_id, None);
        }

        // Second delete is a no-op
        assert!(!soft_delete(&pool, "e5001").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_sees_only_active_trainers() {
        let pool = test_pool().await;
        insert(&pool, &trainer_fixture("e5001", "Ana", "6111111111"))
            .await
            .unwrap();

        assert!(exists(&pool, "e5001").await.unwrap());
        assert!(!exists(&pool, "e5999").await.unwrap());

        soft_delete(&pool, "e5001").await.unwrap();
        assert!(!exists(&pool, "e5001").await.unwrap());
    }
}
