//! Employee Model
//!
//! Trainers and trainees share one identifier space: a record is the common
//! [`Employee`] base plus a role-specific payload, selected by [`Role`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A trainer takes at most this many active trainees.
///
/// The legacy interface docs claimed five; the enforced check has always
/// been two, and two is the invariant this crate implements.
pub const TRAINER_CAPACITY: i64 = 2;

/// Employee role discriminant, stored as lowercase TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Trainer,
    Trainee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Trainer => "trainer",
            Role::Trainee => "trainee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields common to both employee variants.
///
/// `email` is derived at registration and never rewritten afterwards.
/// `is_active` is the soft-delete marker; inactive rows stay in storage but
/// are invisible to normal lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub date_of_joining: NaiveDate,
    pub designation: String,
    pub role: Role,
    pub salary: f64,
    pub is_active: bool,
}

/// Trainer row with its assigned trainees attached on fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Trainer {
    #[cfg_attr(feature = "db", sqlx(flatten))]
    #[serde(flatten)]
    pub employee: Employee,
    pub previous_work_experience: f64,
    pub project_name: String,
    pub batch_name: String,
    /// Cached count of active trainees referencing this trainer; the
    /// assignment and delete paths keep it in lockstep with the trainee
    /// table.
    pub trainee_count: i64,
    /// Active trainees assigned to this trainer (weak reference by id,
    /// populated on fetch, never persisted on this row).
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub trainees: Vec<Trainee>,
}

/// Trainee row; `trainer_id` is absent until assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Trainee {
    #[cfg_attr(feature = "db", sqlx(flatten))]
    #[serde(flatten)]
    pub employee: Employee,
    pub batch_name: String,
    pub trainer_id: Option<String>,
}

/// Fetched record, tagged by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EmployeeRecord {
    Trainer(Trainer),
    Trainee(Trainee),
}

impl EmployeeRecord {
    /// Shared base fields regardless of variant.
    pub fn employee(&self) -> &Employee {
        match self {
            EmployeeRecord::Trainer(t) => &t.employee,
            EmployeeRecord::Trainee(t) => &t.employee,
        }
    }
}

/// Create trainer payload: validated scalars from the shell; id, email and
/// role are filled in at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerCreate {
    pub name: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub date_of_joining: NaiveDate,
    pub designation: String,
    pub salary: f64,
    pub batch_name: String,
    pub previous_work_experience: f64,
    pub project_name: String,
}

/// Create trainee payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraineeCreate {
    pub name: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub date_of_joining: NaiveDate,
    pub designation: String,
    pub salary: f64,
    pub batch_name: String,
}

impl Trainer {
    /// Build a fresh active row from a validated payload plus the generated
    /// identity.
    pub fn from_create(id: String, email: String, data: TrainerCreate) -> Self {
        Self {
            employee: Employee {
                id,
                name: data.name,
                email,
                phone_number: data.phone_number,
                date_of_birth: data.date_of_birth,
                date_of_joining: data.date_of_joining,
                designation: data.designation,
                role: Role::Trainer,
                salary: data.salary,
                is_active: true,
            },
            previous_work_experience: data.previous_work_experience,
            project_name: data.project_name,
            batch_name: data.batch_name,
            trainee_count: 0,
            trainees: Vec::new(),
        }
    }
}

impl Trainee {
    /// Build a fresh active, unassigned row from a validated payload plus
    /// the generated identity.
    pub fn from_create(id: String, email: String, data: TraineeCreate) -> Self {
        Self {
            employee: Employee {
                id,
                name: data.name,
                email,
                phone_number: data.phone_number,
                date_of_birth: data.date_of_birth,
                date_of_joining: data.date_of_joining,
                designation: data.designation,
                role: Role::Trainee,
                salary: data.salary,
                is_active: true,
            },
            batch_name: data.batch_name,
            trainer_id: None,
        }
    }
}
