//! Application state
//!
//! Owns the constructed service instances (database, identity generator,
//! availability index); the interactive shell reaches every operation
//! through this context instead of process-wide statics.

use std::sync::Arc;

use shared::models::{EmployeeRecord, Role, Trainee, TraineeCreate, Trainer, TrainerCreate};
use sqlx::SqlitePool;

use crate::assignment::AssignmentCoordinator;
use crate::availability::AvailabilityIndex;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{RepoResult, trainee, trainer};
use crate::identity::IdentityGenerator;

/// Newly registered employee: the generated identifier and office email,
/// echoed back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub id: String,
    pub email: String,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DbService,
    pub identity: Arc<IdentityGenerator>,
    pub availability: Arc<AvailabilityIndex>,
}

impl AppState {
    pub async fn new(config: &Config) -> RepoResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            db,
            identity: Arc::new(IdentityGenerator::new()),
            availability: Arc::new(AvailabilityIndex::new()),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// Assignment coordinator wired to this state's pool and index.
    pub fn coordinator(&self) -> AssignmentCoordinator {
        AssignmentCoordinator::new(self.db.pool.clone(), Arc::clone(&self.availability))
    }

    /// Generate an identity for the payload and insert the trainer row.
    pub async fn register_trainer(&self, data: TrainerCreate) -> RepoResult<Registered> {
        let id = self.identity.generate_id();
        let email = self.identity.generate_email(&id, &data.name);
        let record = Trainer::from_create(id.clone(), email.clone(), data);
        trainer::insert(self.pool(), &record).await?;
        tracing::info!(id = %id, role = %Role::Trainer, "employee registered");
        Ok(Registered { id, email })
    }

    /// Generate an identity for the payload and insert the trainee row.
    pub async fn register_trainee(&self, data: TraineeCreate) -> RepoResult<Registered> {
        let id = self.identity.generate_id();
        let email = self.identity.generate_email(&id, &data.name);
        let record = Trainee::from_create(id.clone(), email.clone(), data);
        trainee::insert(self.pool(), &record).await?;
        tracing::info!(id = %id, role = %Role::Trainee, "employee registered");
        Ok(Registered { id, email })
    }

    /// Role-dispatched fetch for the shell's display flow. Identifiers are
    /// matched case-insensitively the way the shell historically accepted
    /// them.
    pub async fn fetch_employee(
        &self,
        role: Role,
        id: &str,
    ) -> RepoResult<Option<EmployeeRecord>> {
        let id = id.to_lowercase();
        match role {
            Role::Trainer => Ok(trainer::find_by_id(self.pool(), &id)
                .await?
                .map(EmployeeRecord::Trainer)),
            Role::Trainee => Ok(trainee::find_by_id(self.pool(), &id)
                .await?
                .map(EmployeeRecord::Trainee)),
        }
    }
}
