//! Shared types for the roster core
//!
//! Data models, pure field validation, and the date helpers used by both
//! the record lifecycle crate and its interactive shell.

pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};
