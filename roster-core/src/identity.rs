//! Identifier and office email generation

use std::sync::atomic::{AtomicU32, Ordering};

/// Counter base; the first generated identifier is `e5001`.
const ID_BASE: u32 = 5000;

/// Domain appended to every generated office email.
const EMAIL_DOMAIN: &str = "e5.ai";

/// Monotonic employee-id source.
///
/// One constructed instance is the sole writer of its counter; the atomic
/// increment keeps concurrent callers from ever drawing the same id.
/// Generation itself never fails.
#[derive(Debug)]
pub struct IdentityGenerator {
    counter: AtomicU32,
}

impl IdentityGenerator {
    pub fn new() -> Self {
        Self::with_base(ID_BASE)
    }

    /// Start the counter at a custom base (tests, resuming an id space).
    pub fn with_base(base: u32) -> Self {
        Self {
            counter: AtomicU32::new(base),
        }
    }

    /// Next identifier: `e5001`, `e5002`, ... strictly increasing.
    pub fn generate_id(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("e{next}")
    }

    /// Office email derived from the first name token and the identifier,
    /// e.g. `jane.e5001@e5.ai`.
    pub fn generate_email(&self, id: &str, name: &str) -> String {
        let first = name.split_whitespace().next().unwrap_or_default();
        format!("{}.{}@{}", first.to_lowercase(), id, EMAIL_DOMAIN)
    }
}

impl Default for IdentityGenerator {
    fn default() -> Self {
        Self::new()
    }
}
