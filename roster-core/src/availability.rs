//! Availability Index
//!
//! Materialized view of trainers still under capacity and trainees without
//! a trainer, id → display name. Every browse clears and rebuilds the maps
//! from current active-record state, so a record deactivated elsewhere can
//! never linger; the remove hooks keep the cached view aligned between
//! rebuilds.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared::models::TRAINER_CAPACITY;
use sqlx::SqlitePool;

use crate::db::repository::RepoResult;

#[derive(Debug, Default)]
pub struct AvailabilityIndex {
    available_trainers: RwLock<HashMap<String, String>>,
    unassigned_trainees: RwLock<HashMap<String, String>>,
}

impl AvailabilityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active trainers with open capacity, recomputed from the store.
    pub async fn available_trainers(
        &self,
        pool: &SqlitePool,
    ) -> RepoResult<HashMap<String, String>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, name FROM trainer WHERE trainee_count < ? AND is_active = 1")
                .bind(TRAINER_CAPACITY)
                .fetch_all(pool)
                .await?;

        let mut map = self.available_trainers.write();
        map.clear();
        map.extend(rows);
        Ok(map.clone())
    }

    /// Active trainees with no trainer assigned, recomputed from the store.
    pub async fn unassigned_trainees(
        &self,
        pool: &SqlitePool,
    ) -> RepoResult<HashMap<String, String>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, name FROM trainee WHERE trainer_id IS NULL AND is_active = 1")
                .fetch_all(pool)
                .await?;

        let mut map = self.unassigned_trainees.write();
        map.clear();
        map.extend(rows);
        Ok(map.clone())
    }

    /// Drop a trainer that reached capacity or was deactivated.
    pub fn remove_trainer(&self, id: &str) {
        self.available_trainers.write().remove(id);
    }

    /// Drop a trainee that was assigned or deactivated.
    pub fn remove_trainee(&self, id: &str) {
        self.unassigned_trainees.write().remove(id);
    }

    /// Trainer view as of the last rebuild, without touching the store.
    pub fn cached_available_trainers(&self) -> HashMap<String, String> {
        self.available_trainers.read().clone()
    }

    /// Trainee view as of the last rebuild, without touching the store.
    pub fn cached_unassigned_trainees(&self) -> HashMap<String, String> {
        self.unassigned_trainees.read().clone()
    }
}
