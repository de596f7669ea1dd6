//! Data models
//!
//! Shared between roster-core and the interactive shell.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod employee;

// Re-exports
pub use employee::*;
