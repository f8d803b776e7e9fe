use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique entity identifiers.
pub trait IdProvider {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs, hyphenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable ids (`<prefix>-1`, `<prefix>-2`, ...) for tests and fixtures.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique() {
        let ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
        assert!(Uuid::parse_str(&ids.next_id()).is_ok());
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new("user");
        assert_eq!(ids.next_id(), "user-1");
        assert_eq!(ids.next_id(), "user-2");
    }
}
