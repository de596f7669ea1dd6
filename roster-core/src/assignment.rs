//! Assignment Coordinator
//!
//! Pairs a trainee to a trainer under the capacity invariant. The
//! trainee-reference write and the trainer-count increment commit or roll
//! back together; a partial pairing is never observable.

use std::sync::Arc;

use shared::models::TRAINER_CAPACITY;
use sqlx::SqlitePool;

use crate::availability::AvailabilityIndex;
use crate::db::repository::{RepoError, RepoResult, trainer};

pub struct AssignmentCoordinator {
    pool: SqlitePool,
    availability: Arc<AvailabilityIndex>,
}

impl AssignmentCoordinator {
    pub fn new(pool: SqlitePool, availability: Arc<AvailabilityIndex>) -> Self {
        Self { pool, availability }
    }

    /// Assign `trainee_id` to `trainer_id`.
    ///
    /// `NotFound` when the trainer is missing or inactive, or when no
    /// active, unassigned trainee row matches; `CapacityExceeded` when the
    /// trainer is already full, leaving count and reference untouched.
    pub async fn assign(&self, trainer_id: &str, trainee_id: &str) -> RepoResult<()> {
        if !trainer::exists(&self.pool, trainer_id).await? {
            return Err(RepoError::NotFound(format!(
                "Trainer {trainer_id} not found"
            )));
        }

        let mut tx = self.pool.begin().await?;

        // Capacity guard inside the transaction: the browse filter should
        // make this unreachable, never assume it is.
        let count: Option<i64> =
            sqlx::query_scalar("SELECT trainee_count FROM trainer WHERE id = ? AND is_active = 1")
                .bind(trainer_id)
                .fetch_optional(&mut *tx)
                .await?;
        let count = count.ok_or_else(|| {
            RepoError::NotFound(format!("Trainer {trainer_id} not found"))
        })?;
        if count >= TRAINER_CAPACITY {
            return Err(RepoError::CapacityExceeded(format!(
                "Trainer {trainer_id} already has {count} trainees"
            )));
        }

        let trainee_rows = sqlx::query(
            "UPDATE trainee SET trainer_id = ?1 WHERE id = ?2 AND is_active = 1 AND trainer_id IS NULL",
        )
        .bind(trainer_id)
        .bind(trainee_id)
        .execute(&mut *tx)
        .await?;
        if trainee_rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "Trainee {trainee_id} not found, inactive, or already assigned"
            )));
        }

        let trainer_rows = sqlx::query(
            "UPDATE trainer SET trainee_count = trainee_count + 1 WHERE id = ? AND is_active = 1",
        )
        .bind(trainer_id)
        .execute(&mut *tx)
        .await?;
        if trainer_rows.rows_affected() == 0 {
            // The reference write already applied inside this transaction;
            // dropping it rolls both back.
            return Err(RepoError::Invariant(format!(
                "Trainer {trainer_id} disappeared mid-assignment"
            )));
        }

        tx.commit().await?;

        let count_now: i64 = sqlx::query_scalar("SELECT trainee_count FROM trainer WHERE id = ?")
            .bind(trainer_id)
            .fetch_one(&self.pool)
            .await?;
        if count_now >= TRAINER_CAPACITY {
            self.availability.remove_trainer(trainer_id);
        }
        self.availability.remove_trainee(trainee_id);

        tracing::info!(trainer_id, trainee_id, trainee_count = count_now, "trainee assigned");
        Ok(())
    }
}
